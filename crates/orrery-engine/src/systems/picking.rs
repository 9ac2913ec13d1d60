/// Pointer hit testing against body bounding spheres.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::components::body::Body;

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[cfg(test)]
    fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A picked body and how far along the ray it was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: BodyId,
    pub distance: f32,
}

/// Viewport pixels (origin top-left, y down) to NDC in [-1, 1], y up.
/// Returns `None` for a degenerate viewport.
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Inverse of `pointer_to_ndc`.
pub fn ndc_to_pointer(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * viewport.x,
        (1.0 - ndc.y) / 2.0 * viewport.y,
    )
}

/// Distance along `ray` to the first surface crossing of a sphere, if any.
/// A ray starting inside the sphere reports the exit point.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Nearest body hit by `ray` among `candidates` (body, world-space center).
pub fn pick_body<'a>(candidates: impl Iterator<Item = (&'a Body, Vec3)>, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (body, center) in candidates {
        let Some(distance) = ray_sphere(ray, center, body.bounding_radius()) else {
            continue;
        };
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(PickHit { id: body.id, distance });
        }
    }
    best
}
