use glam::{Vec2, Vec3};

use crate::api::error::SimError;
use crate::assets::manifest::BodyManifest;
use crate::api::types::{BodyId, FrameTime, SimEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::controls::OrbitControls;
use crate::systems::picking::{self, PickHit};

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Initial camera position.
    pub camera_eye: Vec3,
    /// Point the camera orbits around.
    pub camera_target: Vec3,
    /// Orbit-control damping factor (default: 0.05).
    pub damping: f32,
    /// Initial viewport size in pixels, until the host reports a resize.
    pub viewport: Vec2,
    /// Points per orbit guide circle, excluding the closing point (default: 64).
    pub orbit_segments: usize,
    /// Maximum number of body instances in the transform buffer (default: 64).
    pub max_instances: usize,
    /// Maximum number of events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of orbit guides (default: 16).
    pub max_guides: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_eye: Vec3::new(0.0, 20.0, 50.0),
            camera_target: Vec3::ZERO,
            damping: 0.05,
            viewport: Vec2::new(1280.0, 720.0),
            orbit_segments: 64,
            max_instances: 64,
            max_events: 32,
            max_guides: 16,
        }
    }
}

/// The contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Build the scene. Failing here is fatal: the runner stays inert.
    fn init(&mut self, ctx: &mut SimContext) -> Result<(), SimError>;

    /// One animation step. Reads control events from `input`, mutates transforms in place.
    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue, frame: FrameTime);

    /// Body table the host uses to assemble meshes and textures, if the simulation has one.
    fn manifest(&self) -> Option<&BodyManifest> {
        None
    }
}

/// Mutable access to engine state, passed to Simulation::init and Simulation::update.
pub struct SimContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub controls: OrbitControls,
    pub events: Vec<SimEvent>,
    /// Opaque time uniform for the host's glow shader.
    pub effect_time: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Latest pointer position in viewport pixels, once the host reports one.
    pub pointer: Option<Vec2>,
    /// Body currently under `pointer`.
    pub hovered: Option<BodyId>,
    next_id: u32,
}

impl SimContext {
    pub fn new(config: &SimConfig) -> Self {
        let aspect = aspect_ratio(config.viewport);
        let camera = Camera3D::perspective(
            config.camera_eye,
            config.camera_target,
            config.fov_y_degrees,
            aspect,
            config.near,
            config.far,
        );
        let controls = OrbitControls::from_camera(&camera, config.damping);
        Self {
            scene: Scene::new(),
            camera,
            controls,
            events: Vec::new(),
            effect_time: 0.0,
            viewport: config.viewport,
            pointer: None,
            hovered: None,
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Track a viewport resize: new pixel size and camera aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("degenerate viewport {width}x{height}; picking disabled until next resize");
        }
        self.viewport = Vec2::new(width, height);
        self.camera.set_aspect(aspect_ratio(self.viewport));
    }

    /// Pick the nearest planet under the pointer (viewport pixels) against current transforms.
    pub fn pick(&self, pointer: Vec2) -> Option<PickHit> {
        let ndc = picking::pointer_to_ndc(pointer, self.viewport)?;
        let ray = self.camera.ray_from_ndc(ndc);
        picking::pick_body(self.scene.pickable(), &ray)
    }

    /// Re-pick at the stored pointer against current transforms and record the result.
    pub fn refresh_hover(&mut self) -> Option<BodyId> {
        self.hovered = self.pointer.and_then(|p| self.pick(p)).map(|hit| hit.id);
        self.hovered
    }

    /// Name of the hovered body, if any.
    pub fn hovered_name(&self) -> Option<&str> {
        self.hovered
            .and_then(|id| self.scene.get(id))
            .map(|body| body.name.as_str())
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

fn aspect_ratio(viewport: Vec2) -> f32 {
    if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::{Body, BodyKind};

    #[test]
    fn next_id_is_unique() {
        let mut ctx = SimContext::default();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut ctx = SimContext::default();
        ctx.resize(1000.0, 500.0);
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(ctx.viewport, Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn zero_height_viewport_keeps_finite_aspect() {
        let mut ctx = SimContext::default();
        ctx.resize(800.0, 0.0);
        assert!(ctx.camera.aspect.is_finite());
        assert!(ctx.pick(Vec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn pick_at_screen_center_hits_body_on_axis() {
        let mut ctx = SimContext::default();
        let id = ctx.next_id();
        // Camera looks from (0, 20, 50) at the origin; a body at the origin is under screen center.
        ctx.scene.spawn(Body::new(id, BodyKind::Planet).with_name("Target").with_radius(1.0));
        let center = ctx.viewport / 2.0;
        let hit = ctx.pick(center).expect("body under screen center");
        assert_eq!(hit.id, id);
    }

    #[test]
    fn refresh_hover_follows_the_stored_pointer() {
        let mut ctx = SimContext::default();
        let id = ctx.next_id();
        ctx.scene.spawn(Body::new(id, BodyKind::Planet).with_name("Earth").with_radius(2.0));

        assert_eq!(ctx.refresh_hover(), None);

        let center = ctx.viewport / 2.0;
        ctx.pointer = Some(center);
        assert_eq!(ctx.refresh_hover(), Some(id));

        ctx.pointer = Some(Vec2::new(1.0, 1.0));
        assert_eq!(ctx.refresh_hover(), None);
        assert_eq!(ctx.hovered, None);
    }

    #[test]
    fn hovered_name_resolves_through_scene() {
        let mut ctx = SimContext::default();
        let id = ctx.next_id();
        ctx.scene.spawn(Body::new(id, BodyKind::Planet).with_name("Mars"));
        assert_eq!(ctx.hovered_name(), None);
        ctx.hovered = Some(id);
        assert_eq!(ctx.hovered_name(), Some("Mars"));
    }
}
