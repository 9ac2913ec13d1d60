use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::renderer::camera::Camera3D;

/// Keeps the polar angle off the poles, where the view basis degenerates.
const POLAR_EPSILON: f32 = 1e-6;
/// Multiplicative dolly per wheel tick.
const ZOOM_STEP: f32 = 0.95;

/// Damped orbit controls: drag to rotate around a target, wheel to dolly.
///
/// Rotation input accumulates into a delta that is applied a `damping` fraction
/// per `update` and decays by the same factor, so motion eases out.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    radius: f32,
    /// Angle around Y measured from +Z.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    delta_azimuth: f32,
    delta_polar: f32,
    pending_scale: f32,
    drag_last: Option<Vec2>,
}

impl OrbitControls {
    /// Derive the spherical state from the camera's current placement.
    pub fn from_camera(camera: &Camera3D, damping: f32) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        let (azimuth, polar) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target: camera.target,
            damping: damping.clamp(0.0, 1.0),
            rotate_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            radius,
            azimuth,
            polar,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            pending_scale: 1.0,
            drag_last: None,
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag_last = Some(pos);
    }

    /// Rotate by pointer travel. A full viewport height of travel turns one revolution.
    pub fn pointer_move(&mut self, pos: Vec2, viewport_height: f32) {
        let Some(last) = self.drag_last else {
            return;
        };
        if viewport_height > 0.0 {
            let travel = pos - last;
            self.delta_azimuth -= TAU * travel.x / viewport_height * self.rotate_speed;
            self.delta_polar -= TAU * travel.y / viewport_height * self.rotate_speed;
        }
        self.drag_last = Some(pos);
    }

    pub fn pointer_up(&mut self) {
        self.drag_last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// Negative `delta_y` (wheel up) dollies in.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.pending_scale /= ZOOM_STEP;
        }
    }

    /// Distance from the target.
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Apply pending input to the camera. Call once per frame.
    pub fn update(&mut self, camera: &mut Camera3D) {
        self.azimuth += self.delta_azimuth * self.damping;
        self.polar += self.delta_polar * self.damping;
        self.polar = self.polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_scale = 1.0;

        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        );
        camera.eye = self.target + offset;
        camera.target = self.target;

        self.delta_azimuth *= 1.0 - self.damping;
        self.delta_polar *= 1.0 - self.damping;
    }
}
