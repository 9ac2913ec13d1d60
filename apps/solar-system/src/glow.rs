/// Sun glow animation: shader time, pulse and flicker.
///
/// Pulse and flicker are recomputed from elapsed time every frame; only the
/// shader time accumulates.

use crate::bodies::GLOW_LAYERS;

/// Shader time advance per second of frame delta.
const SHADER_RATE: f32 = 0.7;
const PULSE_FREQ: f64 = 1.5;
const PULSE_AMPLITUDE: f64 = 0.015;
const FLICKER_FREQ: f64 = 2.5;
const FLICKER_AMPLITUDE: f64 = 0.04;
const FLICKER_BASE: f64 = 0.97;
/// Sun emissive intensity at flicker = 1.
const EMISSIVE_BASE: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SunGlow {
    /// Opaque time uniform for the glow shader. Never decreases.
    pub shader_time: f32,
    pub pulse: f32,
    pub flicker: f32,
    /// Scale of each glow layer, in `GLOW_LAYERS` order.
    pub layer_scales: [f32; 3],
    pub emissive: f32,
}

impl SunGlow {
    pub fn new() -> Self {
        let mut glow = Self {
            shader_time: 0.0,
            pulse: 1.0,
            flicker: 1.0,
            layer_scales: [1.0; 3],
            emissive: EMISSIVE_BASE,
        };
        glow.advance(0.0, 0.0);
        glow
    }

    /// Advance by one frame. A negative `delta` counts as zero.
    pub fn advance(&mut self, delta: f32, elapsed: f64) {
        self.shader_time += delta.max(0.0) * SHADER_RATE;

        self.pulse = ((elapsed * PULSE_FREQ).sin() * PULSE_AMPLITUDE + 1.0) as f32;
        for (scale, layer) in self.layer_scales.iter_mut().zip(GLOW_LAYERS.iter()) {
            *scale = self.pulse * layer.multiplier;
        }

        self.flicker = (FLICKER_BASE + (elapsed * FLICKER_FREQ).sin() * FLICKER_AMPLITUDE) as f32;
        self.emissive = EMISSIVE_BASE * self.flicker;
    }
}

impl Default for SunGlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_time_advances_with_delta() {
        let mut glow = SunGlow::new();
        glow.advance(1.0, 1.0);
        glow.advance(0.5, 1.5);
        assert!((glow.shader_time - 1.05).abs() < 1e-5);
    }

    #[test]
    fn negative_delta_is_clamped() {
        let mut glow = SunGlow::new();
        glow.advance(0.1, 0.1);
        let before = glow.shader_time;
        glow.advance(-0.5, 0.2);
        assert_eq!(glow.shader_time, before);
    }

    #[test]
    fn pulse_and_flicker_at_rest() {
        let glow = SunGlow::new();
        assert_eq!(glow.pulse, 1.0);
        assert!((glow.flicker - 0.97).abs() < 1e-6);
        assert!((glow.emissive - 3.88).abs() < 1e-5);
        assert!((glow.layer_scales[0] - 1.006).abs() < 1e-6);
        assert!((glow.layer_scales[1] - 1.012).abs() < 1e-6);
        assert!((glow.layer_scales[2] - 1.009).abs() < 1e-6);
    }

    #[test]
    fn pulse_and_flicker_stay_in_band() {
        let mut glow = SunGlow::new();
        for i in 0..1000 {
            glow.advance(0.016, i as f64 * 0.016);
            assert!(glow.pulse >= 0.985 - 1e-6 && glow.pulse <= 1.015 + 1e-6);
            assert!(glow.flicker >= 0.93 - 1e-6 && glow.flicker <= 1.01 + 1e-6);
            assert!((glow.emissive - 4.0 * glow.flicker).abs() < 1e-6);
        }
    }

    #[test]
    fn derived_values_depend_only_on_elapsed() {
        let mut a = SunGlow::new();
        let mut b = SunGlow::new();
        a.advance(0.016, 3.0);
        b.advance(0.5, 1.0);
        b.advance(0.5, 3.0);
        assert_eq!(a.pulse, b.pulse);
        assert_eq!(a.layer_scales, b.layer_scales);
        assert_eq!(a.emissive, b.emissive);
        assert_ne!(a.shader_time, b.shader_time);
    }
}
