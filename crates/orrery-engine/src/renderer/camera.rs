use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::systems::picking::Ray;

/// Perspective camera for the 3D scene.
/// GL clip conventions (NDC z in [-1, 1]) to match the host's WebGL renderer.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w unused). Doubles as the glow shader's view vector.
    pub eye: [f32; 4],
}

impl Camera3D {
    pub fn perspective(eye: Vec3, target: Vec3, fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: [self.eye.x, self.eye.y, self.eye.z, 1.0],
        }
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Project a world-space point to normalized device coordinates.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection().project_point3(point)
    }

    /// Map normalized device coordinates back to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection().inverse().project_point3(ndc)
    }

    /// Picking ray from the eye through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let through = self.unproject(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.eye, through - self.eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::perspective(Vec3::new(0.0, 20.0, 50.0), Vec3::ZERO, 75.0, 16.0 / 9.0, 0.1, 1000.0)
    }

    #[test]
    fn target_projects_to_center() {
        let ndc = camera().project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn positive_x_projects_right() {
        let ndc = camera().project(Vec3::new(10.0, 0.0, 0.0));
        assert!(ndc.x > 0.0);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!((ray.direction - expected).length() < 1e-4);
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn unproject_inverts_project() {
        let cam = camera();
        let p = Vec3::new(7.0, -1.0, 3.0);
        let back = cam.unproject(cam.project(p));
        assert!((back - p).length() < 5e-2, "round trip drifted to {:?}", back);
    }

    #[test]
    fn uniform_carries_eye() {
        let u = camera().uniform();
        assert_eq!(u.eye, [0.0, 20.0, 50.0, 1.0]);
    }
}
