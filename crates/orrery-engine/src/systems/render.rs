use crate::core::scene::Scene;
use crate::renderer::instance::{BodyInstance, TransformBuffer};

/// Build the transform buffer from the scene, one instance per body in spawn order.
/// Parented bodies are written at their resolved world position.
pub fn build_transform_buffer(scene: &Scene, buffer: &mut TransformBuffer) {
    buffer.clear();

    for body in scene.iter() {
        let pos = scene.world_position(body);
        buffer.push(BodyInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            rotation_y: body.rotation_y,
            tilt: body.tilt,
            scale: body.scale,
            emissive: body.emissive,
            id: body.id.0 as f32,
        });
    }
}
