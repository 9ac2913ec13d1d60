/// Per-frame orbital update: circular orbits in the y=0 plane plus self-rotation.

use orrery_engine::Body;

/// Self-rotation per frame for a planet at speed 1.
pub const SPIN_PER_FRAME: f32 = 0.01;
/// Sun self-rotation per frame, independent of any speed control.
pub const SUN_ROTATION: f32 = 0.003;

/// Orbit angle in radians. Computed in f64 so long sessions keep precision.
pub fn orbit_angle(elapsed: f64, orbit_speed: f32, base_speed: f32) -> f64 {
    elapsed * orbit_speed as f64 * base_speed as f64
}

/// Place a planet on its orbit for `elapsed` and advance its spin by one frame.
pub fn step_planet(body: &mut Body, elapsed: f64) {
    let angle = orbit_angle(elapsed, body.orbit_speed, body.base_speed);
    let distance = body.orbital_distance as f64;
    body.position.x = (angle.cos() * distance) as f32;
    body.position.z = (angle.sin() * distance) as f32;
    body.rotation_y += SPIN_PER_FRAME * body.base_speed;
}

pub fn step_sun(sun: &mut Body) {
    sun.rotation_y += SUN_ROTATION;
}
