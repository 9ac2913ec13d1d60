use crate::api::types::FrameTime;

/// Monotonic animation clock fed by host timestamps.
/// The first sample starts the clock; later samples yield delta and elapsed time.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Host timestamp of the first sample, in seconds.
    start: Option<f64>,
    /// Host timestamp of the latest accepted sample.
    last: f64,
    /// Latest sample.
    current: FrameTime,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the clock at host time `now` (seconds).
    /// A timestamp earlier than the previous one yields a zero delta and leaves elapsed unchanged.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let start = match self.start {
            Some(start) => start,
            None => {
                self.start = Some(now);
                self.last = now;
                self.current = FrameTime::default();
                return self.current;
            }
        };

        let delta = (now - self.last).max(0.0);
        self.last = self.last.max(now);
        let elapsed = (self.last - start).max(self.current.elapsed);
        self.current = FrameTime::new(delta as f32, elapsed);
        self.current
    }

    /// Seconds between the two most recent samples.
    pub fn delta(&self) -> f32 {
        self.current.delta
    }

    /// Seconds since the first sample.
    pub fn elapsed(&self) -> f64 {
        self.current.elapsed
    }

    /// Whether the clock has received its first sample.
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_starts_at_zero() {
        let mut clock = Clock::new();
        let frame = clock.tick(12.5);
        assert_eq!(frame.delta, 0.0);
        assert_eq!(frame.elapsed, 0.0);
        assert!(clock.is_started());
    }

    #[test]
    fn reports_delta_and_elapsed() {
        let mut clock = Clock::new();
        clock.tick(10.0);
        clock.tick(10.5);
        let frame = clock.tick(10.75);
        assert!((frame.delta - 0.25).abs() < 1e-6);
        assert!((frame.elapsed - 0.75).abs() < 1e-9);
        assert!((clock.delta() - 0.25).abs() < 1e-6);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn backwards_timestamp_clamps_to_zero() {
        let mut clock = Clock::new();
        clock.tick(5.0);
        clock.tick(6.0);
        let frame = clock.tick(5.5);
        assert_eq!(frame.delta, 0.0);
        assert!((frame.elapsed - 1.0).abs() < 1e-9);

        // Recovery measures from the latest accepted timestamp.
        let frame = clock.tick(6.5);
        assert!((frame.delta - 0.5).abs() < 1e-6);
        assert!((frame.elapsed - 1.5).abs() < 1e-9);
    }

    #[test]
    fn long_gap_is_a_single_jump() {
        let mut clock = Clock::new();
        clock.tick(0.0);
        clock.tick(1.0);
        let frame = clock.tick(31.0);
        assert!((frame.delta - 30.0).abs() < 1e-6);
        assert!((frame.elapsed - 31.0).abs() < 1e-9);
    }
}
