use std::f32::consts::TAU;

use glam::Vec3;

use crate::components::body::BodyKind;
use crate::core::scene::Scene;

/// Floats per guide point: x, y, z.
pub const GUIDE_POINT_FLOATS: usize = 3;

/// Closed circle of `segments + 1` points in the y=0 plane.
/// The last point repeats the first so a line strip closes.
pub fn orbit_guide(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Flatten one orbit guide per planet into `out` (x, y, z per point).
/// Returns the number of guides written.
pub fn build_guide_buffer(scene: &Scene, segments: usize, max_guides: usize, out: &mut Vec<f32>) -> usize {
    out.clear();
    let mut count = 0;
    for planet in scene.of_kind(BodyKind::Planet).take(max_guides) {
        for p in orbit_guide(planet.orbital_distance, segments) {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::Body;

    #[test]
    fn guide_is_closed_and_planar() {
        let points = orbit_guide(10.0, 64);
        assert_eq!(points.len(), 65);
        assert!((points[0] - points[64]).length() < 1e-4);
        for p in &points {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn guide_buffer_has_one_circle_per_planet() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1), BodyKind::Sun));
        scene.spawn(Body::new(BodyId(2), BodyKind::Planet).with_orbit(5.0, 0.004, 1.0));
        scene.spawn(Body::new(BodyId(3), BodyKind::Planet).with_orbit(7.0, 0.002, 0.8));

        let mut out = Vec::new();
        let count = build_guide_buffer(&scene, 64, 16, &mut out);
        assert_eq!(count, 2);
        assert_eq!(out.len(), 2 * 65 * GUIDE_POINT_FLOATS);
        assert!((out[0] - 5.0).abs() < 1e-5);
        assert!((out[65 * 3] - 7.0).abs() < 1e-5);
    }
}
