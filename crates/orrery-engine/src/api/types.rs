use bytemuck::{Pod, Zeroable};

/// Unique identifier for a body in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// An event communicated from Rust to the host UI through the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SimEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SimEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// Per-frame time sample handed to `Simulation::update`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous sample (never negative).
    pub delta: f32,
    /// Seconds since the clock started (never decreases).
    pub elapsed: f64,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f64) -> Self {
        Self {
            delta: delta.max(0.0),
            elapsed: elapsed.max(0.0),
        }
    }
}
