/// Body registry — the sun, eight planets and their decorations.
///
/// Sizes and distances are scene units, chosen for readability rather than scale.
/// Orbit speed constants are arbitrary; the angle is `elapsed * orbit_speed * speed`.

use orrery_engine::{BodyManifest, PlanetDescriptor, SunDescriptor};

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

const TEXTURE_DIR: &str = "assets/textures";

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 3.0;
/// Emissive intensity at creation, before the first flicker update.
pub const SUN_EMISSIVE: f32 = 5.0;
const SUN_TEXTURE: &str = "8k_sun.jpg";
const SUN_GLOW_TEXTURE: &str = "sunglow.jpg";

/// One glow shell around the sun.
pub struct GlowLayer {
    pub name: &'static str,
    pub radius: f32,
    /// Scale multiplier applied on top of the shared pulse.
    pub multiplier: f32,
}

/// Inner shell, shader-driven outer shell, corona.
pub const GLOW_LAYERS: [GlowLayer; 3] = [
    GlowLayer { name: "Sun Glow", radius: 3.02, multiplier: 1.006 },
    GlowLayer { name: "Sun Shader Glow", radius: 3.1, multiplier: 1.012 },
    GlowLayer { name: "Sun Corona", radius: 3.0, multiplier: 1.009 },
];

// ── Rings ────────────────────────────────────────────────────────────

pub const RING_INNER: f32 = 1.5;
pub const RING_OUTER: f32 = 1.8;
pub const RING_TILT: f32 = std::f32::consts::PI / 3.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STARFIELD_NAME: &str = "Starfield";
pub const STARFIELD_RADIUS: f32 = 1000.0;
const STARFIELD_TEXTURE: &str = "8k_stars_milky_way.jpg";

// ── Planets ──────────────────────────────────────────────────────────

/// Static row of the planet table.
pub struct PlanetData {
    pub name: &'static str,
    pub size: f32,
    pub distance: f32,
    /// Default speed multiplier.
    pub speed: f32,
    pub orbit_speed: f32,
    pub texture: &'static str,
    pub night_texture: Option<&'static str>,
    pub ring_texture: Option<&'static str>,
}

pub const PLANETS: [PlanetData; PLANET_COUNT] = [
    PlanetData {
        name: "Mercury", size: 0.4, distance: 5.0, speed: 1.0, orbit_speed: 0.004,
        texture: "8k_mercury.jpg", night_texture: None, ring_texture: None,
    },
    PlanetData {
        name: "Venus", size: 0.6, distance: 7.0, speed: 0.8, orbit_speed: 0.002,
        texture: "8k_venus_surface.jpg", night_texture: None, ring_texture: None,
    },
    PlanetData {
        name: "Earth", size: 0.6, distance: 10.0, speed: 0.7, orbit_speed: 0.0015,
        texture: "8k_earth_daymap.jpg", night_texture: Some("8k_earth_nightmap.jpg"),
        ring_texture: None,
    },
    PlanetData {
        name: "Mars", size: 0.5, distance: 15.0, speed: 0.6, orbit_speed: 0.0012,
        texture: "8k_mars.jpg", night_texture: None, ring_texture: None,
    },
    PlanetData {
        name: "Jupiter", size: 1.2, distance: 20.0, speed: 0.4, orbit_speed: 0.0007,
        texture: "8k_jupiter.jpg", night_texture: None, ring_texture: None,
    },
    PlanetData {
        name: "Saturn", size: 1.0, distance: 25.0, speed: 0.3, orbit_speed: 0.0005,
        texture: "8k_saturn.jpg", night_texture: None,
        ring_texture: Some("8k_saturn_ring_alpha.png"),
    },
    PlanetData {
        name: "Uranus", size: 0.8, distance: 30.0, speed: 0.2, orbit_speed: 0.0003,
        texture: "2k_uranus.jpg", night_texture: None, ring_texture: None,
    },
    PlanetData {
        name: "Neptune", size: 0.8, distance: 35.0, speed: 0.1, orbit_speed: 0.0002,
        texture: "2k_neptune.jpg", night_texture: None, ring_texture: None,
    },
];

pub fn texture_path(file: &str) -> String {
    format!("{TEXTURE_DIR}/{file}")
}

/// The built-in table, in the same shape a JSON override takes.
pub fn default_manifest() -> BodyManifest {
    BodyManifest {
        sun: SunDescriptor {
            name: SUN_NAME.to_string(),
            radius: SUN_RADIUS,
            texture: Some(texture_path(SUN_TEXTURE)),
            glow_texture: Some(texture_path(SUN_GLOW_TEXTURE)),
        },
        planets: PLANETS
            .iter()
            .map(|p| PlanetDescriptor {
                name: p.name.to_string(),
                size: p.size,
                distance: p.distance,
                speed: p.speed,
                orbit_speed: p.orbit_speed,
                texture: Some(texture_path(p.texture)),
                night_texture: p.night_texture.map(texture_path),
                has_ring: p.ring_texture.is_some(),
                ring_texture: p.ring_texture.map(texture_path),
            })
            .collect(),
        starfield_texture: Some(texture_path(STARFIELD_TEXTURE)),
    }
}

/// Inner and outer radius of a ring around a planet of `size`.
pub fn ring_radii(size: f32) -> (f32, f32) {
    (RING_INNER * size, RING_OUTER * size)
}
