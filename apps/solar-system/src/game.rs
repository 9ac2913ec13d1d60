/// Solar System — textured 3D orrery with a glowing sun.
///
/// Circular orbits driven by elapsed time, hover tooltips via ray picking,
/// per-planet speed sliders, pause and a light/dark theme toggle.

use orrery_engine::*;

use crate::animation;
use crate::bodies::{self, GLOW_LAYERS};
use crate::glow::SunGlow;

// ── Custom event kinds from the host UI ──────────────────────────────

/// a = planet index, b = new speed multiplier.
const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_RESET_SPEEDS: u32 = 2;
const CUSTOM_TOGGLE_THEME: u32 = 3;

// ── Sim event kinds to the host UI ───────────────────────────────────

/// a = planet index, b = speed (slider label).
pub const EVENT_SPEED: f32 = 1.0;
/// a = 1 for light mode, 0 for dark.
pub const EVENT_THEME: f32 = 2.0;
/// a = hovered body id, or -1.
pub const EVENT_HOVER: f32 = 3.0;

pub struct SolarSystem {
    manifest: BodyManifest,
    glow: SunGlow,
    light_mode: bool,

    // Entity IDs
    sun_id: Option<BodyId>,
    glow_ids: Vec<BodyId>,
    planet_ids: Vec<BodyId>,

    /// Hover last reported through an event.
    last_hover: Option<BodyId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_manifest(bodies::default_manifest())
    }

    /// Use a custom body table. It is validated in `init`.
    pub fn with_manifest(manifest: BodyManifest) -> Self {
        Self {
            manifest,
            glow: SunGlow::new(),
            light_mode: false,
            sun_id: None,
            glow_ids: Vec::new(),
            planet_ids: Vec::new(),
            last_hover: None,
        }
    }

    pub fn is_light_mode(&self) -> bool {
        self.light_mode
    }

    pub fn planet_ids(&self) -> &[BodyId] {
        &self.planet_ids
    }

    pub fn sun_id(&self) -> Option<BodyId> {
        self.sun_id
    }

    fn handle_custom(&mut self, ctx: &mut SimContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => self.set_speed(ctx, a, b),
            CUSTOM_RESET_SPEEDS => {
                for (idx, &id) in self.planet_ids.iter().enumerate() {
                    let Some(body) = ctx.scene.get_mut(id) else {
                        continue;
                    };
                    body.base_speed = body.original_speed;
                    let speed = body.base_speed;
                    ctx.emit_event(SimEvent::new(EVENT_SPEED, idx as f32, speed, 0.0));
                }
            }
            CUSTOM_TOGGLE_THEME => {
                self.light_mode = !self.light_mode;
                let flag = if self.light_mode { 1.0 } else { 0.0 };
                ctx.emit_event(SimEvent::new(EVENT_THEME, flag, 0.0, 0.0));
            }
            other => log::debug!("ignoring custom event kind {other}"),
        }
    }

    /// Slider input. No bounds on the value; a bad index is dropped.
    fn set_speed(&mut self, ctx: &mut SimContext, index: f32, speed: f32) {
        let id = if index.is_finite() && index >= 0.0 {
            self.planet_ids.get(index as usize).copied()
        } else {
            None
        };
        let Some(body) = id.and_then(|id| ctx.scene.get_mut(id)) else {
            log::warn!("speed change for unknown planet index {index}");
            return;
        };
        body.base_speed = speed;
        ctx.emit_event(SimEvent::new(EVENT_SPEED, index.trunc(), speed, 0.0));
    }

    /// Re-pick under the pointer so the hover tracks moving planets.
    /// Reports any change since the last hover event, including moves made while paused.
    fn refresh_hover(&mut self, ctx: &mut SimContext) {
        let hovered = ctx.refresh_hover();
        if hovered != self.last_hover {
            self.last_hover = hovered;
            let code = hovered.map_or(-1.0, |id| id.0 as f32);
            ctx.emit_event(SimEvent::new(EVENT_HOVER, code, 0.0, 0.0));
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSystem {
    fn config(&self) -> SimConfig {
        SimConfig {
            max_instances: 32,
            max_events: 32,
            max_guides: bodies::PLANET_COUNT,
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) -> Result<(), SimError> {
        self.manifest.validate(bodies::PLANET_COUNT)?;

        self.glow = SunGlow::new();
        self.glow_ids.clear();
        self.planet_ids.clear();
        self.last_hover = None;

        // ── Sun and glow shells ──────────────────────────────────────
        let sun = &self.manifest.sun;
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Body::new(sun_id, BodyKind::Sun)
                .with_name(sun.name.as_str())
                .with_radius(sun.radius)
                .with_emissive(bodies::SUN_EMISSIVE),
        );
        self.sun_id = Some(sun_id);

        // Shell radii are relative to the built-in sun, so a resized sun keeps its halo.
        let shell_factor = sun.radius / bodies::SUN_RADIUS;
        for (layer, &scale) in GLOW_LAYERS.iter().zip(self.glow.layer_scales.iter()) {
            let id = ctx.next_id();
            let mut shell = Body::new(id, BodyKind::Glow)
                .with_name(layer.name)
                .with_radius(layer.radius * shell_factor)
                .with_parent(sun_id);
            shell.scale = scale;
            ctx.scene.spawn(shell);
            self.glow_ids.push(id);
        }

        // ── Planets and rings ────────────────────────────────────────
        for planet in &self.manifest.planets {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(id, BodyKind::Planet)
                    .with_name(planet.name.as_str())
                    .with_radius(planet.size)
                    .with_orbit(planet.distance, planet.orbit_speed, planet.speed)
                    .with_ring(planet.has_ring)
                    .with_night_texture(planet.has_night_texture()),
            );
            self.planet_ids.push(id);

            if planet.has_ring {
                let (_, outer) = bodies::ring_radii(planet.size);
                let ring_id = ctx.next_id();
                ctx.scene.spawn(
                    Body::new(ring_id, BodyKind::Ring)
                        .with_name(format!("{} Ring", planet.name))
                        .with_radius(outer)
                        .with_tilt(bodies::RING_TILT)
                        .with_parent(id),
                );
            }
        }

        // ── Starfield ────────────────────────────────────────────────
        let stars_id = ctx.next_id();
        ctx.scene.spawn(
            Body::new(stars_id, BodyKind::Backdrop)
                .with_name(bodies::STARFIELD_NAME)
                .with_radius(bodies::STARFIELD_RADIUS),
        );

        if ctx.scene.of_kind(BodyKind::Planet).count() != bodies::PLANET_COUNT {
            return Err(SimError::MissingBody("planet".to_string()));
        }

        log::info!(
            "Solar system: {} planets, {} bodies",
            self.planet_ids.len(),
            ctx.scene.len()
        );
        Ok(())
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue, frame: FrameTime) {
        for event in input.iter() {
            let InputEvent::Custom { kind, a, b, .. } = *event;
            self.handle_custom(ctx, kind, a, b);
        }

        // ── Sun glow ─────────────────────────────────────────────────
        self.glow.advance(frame.delta, frame.elapsed);
        for (&id, &scale) in self.glow_ids.iter().zip(self.glow.layer_scales.iter()) {
            if let Some(shell) = ctx.scene.get_mut(id) {
                shell.scale = scale;
            }
        }
        ctx.effect_time = self.glow.shader_time;

        if let Some(sun) = self.sun_id.and_then(|id| ctx.scene.get_mut(id)) {
            sun.emissive = self.glow.emissive;
            animation::step_sun(sun);
        }

        // ── Orbits ───────────────────────────────────────────────────
        for planet in ctx.scene.of_kind_mut(BodyKind::Planet) {
            animation::step_planet(planet, frame.elapsed);
        }

        self.refresh_hover(ctx);
    }

    fn manifest(&self) -> Option<&BodyManifest> {
        Some(&self.manifest)
    }
}
