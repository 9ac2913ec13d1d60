use glam::Vec2;
use orrery_engine::{
    Simulation, SimConfig, SimContext, SimError,
    InputEvent, InputQueue, TransformBuffer,
    Clock, FrameHeader, ProtocolLayout, BodyManifest,
    build_transform_buffer, build_guide_buffer,
};

/// Generic runner that wires up the frame loop.
///
/// Each concrete simulation creates a `thread_local!` SimRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
///
/// Scheduling stays with the host: it calls `frame` from its display callback and
/// re-arms only while `frame` returns `true`.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    clock: Clock,
    transforms: TransformBuffer,
    guides: Vec<f32>,
    /// Packed frame for the host, laid out by `layout`.
    shared: Vec<f32>,
    config: SimConfig,
    layout: ProtocolLayout,
    initialized: bool,
    paused: bool,
    /// Whether the host currently has a frame callback pending.
    armed: bool,
    frame_counter: u32,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            sim,
            ctx: SimContext::new(&config),
            input: InputQueue::new(),
            clock: Clock::new(),
            transforms: TransformBuffer::with_capacity(config.max_instances),
            guides: Vec::new(),
            shared: Vec::with_capacity(layout.buffer_total_floats),
            layout,
            config,
            initialized: false,
            paused: false,
            armed: false,
            frame_counter: 0,
        }
    }

    /// Build the scene. Call once after construction; the host then starts its loop.
    pub fn init(&mut self) -> Result<(), SimError> {
        self.config = self.sim.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = SimContext::new(&self.config);
        self.sim.init(&mut self.ctx)?;

        let guide_count = build_guide_buffer(
            &self.ctx.scene,
            self.config.orbit_segments,
            self.config.max_guides,
            &mut self.guides,
        );
        log::debug!("{} bodies, {} orbit guides", self.ctx.scene.len(), guide_count);

        self.publish();
        self.initialized = true;
        self.armed = true;
        Ok(())
    }

    /// Run one frame at host time `now` (seconds).
    /// Returns whether the host should schedule another frame.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.initialized || self.paused {
            self.armed = false;
            return false;
        }

        self.ctx.clear_frame_data();
        let frame = self.clock.tick(now);

        self.sim.update(&mut self.ctx, &self.input, frame);
        self.input.drain();

        self.ctx.controls.update(&mut self.ctx.camera);
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.publish();

        self.armed = true;
        true
    }

    /// Stop mutating state. The pending frame, if any, will decline to re-arm.
    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("paused at t={:.3}s", self.clock.elapsed());
        }
        self.paused = true;
        self.publish();
    }

    /// Resume from the clock's current time. Idempotent.
    /// Returns `true` only when the host must schedule a frame, i.e. no loop is armed.
    pub fn resume(&mut self) -> bool {
        self.paused = false;
        if !self.initialized || self.armed {
            return false;
        }
        log::debug!("resumed");
        self.armed = true;
        true
    }

    /// Flip pause state. Returns `true` when the host must schedule a frame.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause();
            false
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.ctx.controls.pointer_down(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.ctx.controls.pointer_up();
    }

    /// Hover pick against the latest transforms. Works while paused.
    /// Returns the name of the body under the pointer, for the tooltip.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<&str> {
        let pointer = Vec2::new(x, y);
        self.ctx.controls.pointer_move(pointer, self.ctx.viewport.y);
        self.ctx.pointer = Some(pointer);
        self.ctx.refresh_hover();
        self.ctx.hovered_name()
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.ctx.controls.wheel(delta_y);
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.resize(width, height);
    }

    /// Rebuild the transform buffer and pack the shared frame.
    fn publish(&mut self) {
        build_transform_buffer(&self.ctx.scene, &mut self.transforms);
        let header = FrameHeader {
            frame_counter: self.frame_counter,
            effect_time: self.ctx.effect_time,
            paused: self.paused,
            hovered: self.ctx.hovered.map(|id| id.0),
            viewport: self.ctx.viewport,
        };
        self.layout.pack(
            &header,
            &self.transforms.instances,
            &self.ctx.events,
            &self.guides,
            &mut self.shared,
        );
    }

    // ---- Read access for the host and for tests ----

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn simulation(&self) -> &S {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    pub fn manifest(&self) -> Option<&BodyManifest> {
        self.sim.manifest()
    }

    pub fn shared(&self) -> &[f32] {
        &self.shared
    }

    pub fn camera_uniform(&self) -> [f32; 20] {
        let u = self.ctx.camera.uniform();
        let mut out = [0.0; 20];
        out.copy_from_slice(bytemuck::cast_slice(&[u]));
        out
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn shared_ptr(&self) -> *const f32 {
        self.shared.as_ptr()
    }

    pub fn shared_len(&self) -> u32 {
        self.shared.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.transforms.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.transforms.instance_count()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn effect_time(&self) -> f32 {
        self.ctx.effect_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Body, BodyKind, FrameTime};
    use glam::Vec3;

    /// Minimal simulation: one planet that counts its updates.
    struct Probe {
        updates: u32,
        inputs: usize,
        fail: bool,
    }

    impl Simulation for Probe {
        fn init(&mut self, ctx: &mut SimContext) -> Result<(), SimError> {
            if self.fail {
                return Err(SimError::MissingBody("Sun".to_string()));
            }
            let id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(id, BodyKind::Planet)
                    .with_name("Probe")
                    .with_radius(2.0)
                    .with_position(Vec3::ZERO),
            );
            Ok(())
        }

        fn update(&mut self, ctx: &mut SimContext, input: &InputQueue, frame: FrameTime) {
            self.updates += 1;
            self.inputs += input.len();
            for body in ctx.scene.iter_mut() {
                body.rotation_y = frame.elapsed as f32;
            }
        }
    }

    fn runner() -> SimRunner<Probe> {
        let mut r = SimRunner::new(Probe { updates: 0, inputs: 0, fail: false });
        r.init().unwrap();
        r
    }

    #[test]
    fn frame_runs_update_and_rearms() {
        let mut r = runner();
        assert!(r.frame(0.0));
        assert!(r.frame(0.016));
        assert_eq!(r.simulation().updates, 2);
        assert_eq!(r.instance_count(), 1);
        assert_eq!(r.shared_len(), r.buffer_total_floats());
    }

    #[test]
    fn paused_frame_does_not_mutate_or_rearm() {
        let mut r = runner();
        r.frame(0.0);
        r.frame(1.0);
        let before = r.context().scene.iter().next().unwrap().rotation_y;

        r.pause();
        assert!(!r.frame(2.0));
        assert_eq!(r.simulation().updates, 2);
        assert_eq!(r.context().scene.iter().next().unwrap().rotation_y, before);
    }

    #[test]
    fn resume_is_idempotent() {
        let mut r = runner();
        r.frame(0.0);
        r.pause();
        // The pending frame observes the pause and disarms.
        assert!(!r.frame(0.016));

        assert!(r.resume(), "first resume must re-arm the loop");
        assert!(!r.resume(), "second resume must not double-schedule");
        assert!(!r.is_paused());
    }

    #[test]
    fn resume_before_pending_frame_needs_no_rearm() {
        let mut r = runner();
        r.frame(0.0);
        r.pause();
        // Host still has a callback pending, so nothing to schedule.
        assert!(!r.resume());
        assert!(r.frame(0.016));
    }

    #[test]
    fn toggle_pause_round_trip() {
        let mut r = runner();
        r.frame(0.0);
        assert!(!r.toggle_pause());
        assert!(r.is_paused());
        r.frame(0.016);
        assert!(r.toggle_pause());
        assert!(!r.is_paused());
    }

    #[test]
    fn resume_continues_from_clock_time() {
        let mut r = runner();
        r.frame(10.0);
        r.frame(11.0);
        r.pause();
        r.frame(12.0);
        r.resume();
        r.frame(20.0);
        let rotation = r.context().scene.iter().next().unwrap().rotation_y;
        assert!((rotation - 10.0).abs() < 1e-4);
    }

    #[test]
    fn pointer_move_picks_while_paused() {
        let mut r = runner();
        r.resize(800.0, 600.0);
        r.frame(0.0);
        r.pause();
        assert_eq!(r.pointer_move(400.0, 300.0), Some("Probe"));
        assert_eq!(r.pointer_move(2.0, 2.0), None);
        assert!(r.context().hovered.is_none());
    }

    #[test]
    fn pointer_and_wheel_only_drive_controls() {
        let mut r = runner();
        r.frame(0.0);
        r.pause();
        for i in 0..50 {
            r.pointer_down(10.0, 10.0);
            r.pointer_move(10.0 + i as f32, 10.0);
            r.pointer_up();
            r.wheel(120.0);
        }
        r.resume();
        r.frame(0.016);
        assert_eq!(r.simulation().inputs, 0);

        r.push_input(InputEvent::Custom { kind: 1, a: 0.0, b: 0.0, c: 0.0 });
        r.frame(0.032);
        assert_eq!(r.simulation().inputs, 1);
    }

    #[test]
    fn failed_init_leaves_runner_inert() {
        let mut r = SimRunner::new(Probe { updates: 0, inputs: 0, fail: true });
        assert!(r.init().is_err());
        assert!(!r.frame(0.0));
        assert!(!r.resume());
        assert_eq!(r.simulation().updates, 0);
    }

    #[test]
    fn camera_uniform_is_flat() {
        let r = runner();
        let u = r.camera_uniform();
        assert_eq!(&u[16..19], &[0.0, 20.0, 50.0]);
    }
}
