use bytemuck::{Pod, Zeroable};

/// Per-body transform written to the shared buffer for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World-space position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Spin about Y in radians.
    pub rotation_y: f32,
    /// Fixed rotation about X in radians.
    pub tilt: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Emissive intensity.
    pub emissive: f32,
    /// Body id, so the host can map instances to its meshes.
    pub id: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Transform buffer containing one instance per body, in scene order.
pub struct TransformBuffer {
    pub instances: Vec<BodyInstance>,
}

impl TransformBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data viewed as flat floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for TransformBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}
