use glam::Vec3;
use crate::api::types::BodyId;

/// What a body is, for rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The central star. Exactly one per scene.
    Sun,
    /// An orbiting planet. The only kind the picker tests.
    Planet,
    /// A glow shell around the sun.
    Glow,
    /// A flat ring attached to a planet.
    Ring,
    /// The starfield sphere.
    Backdrop,
}

impl BodyKind {
    /// Numeric code used in the wire format.
    pub fn code(self) -> f32 {
        match self {
            BodyKind::Sun => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Glow => 2.0,
            BodyKind::Ring => 3.0,
            BodyKind::Backdrop => 4.0,
        }
    }
}

/// Fat body record: one struct carrying orbital, visual and running state.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// Display name, unique across bodies that have one.
    pub name: String,
    pub kind: BodyKind,
    /// Geometry radius (visual size only).
    pub radius: f32,
    /// Uniform scale applied on top of `radius`.
    pub scale: f32,
    /// Radius of the circular orbit in the y=0 plane (0 for the sun).
    pub orbital_distance: f32,
    /// User-adjustable speed multiplier.
    pub base_speed: f32,
    /// Registry default for `base_speed`, used to reset controls.
    pub original_speed: f32,
    /// Fixed angular rate; angle = elapsed * orbit_speed * base_speed.
    pub orbit_speed: f32,
    /// Position, local to `parent` when one is set.
    pub position: Vec3,
    /// Accumulated spin about the Y axis. Grows without bound.
    pub rotation_y: f32,
    /// Fixed rotation about the X axis (ring inclination).
    pub tilt: f32,
    /// Emissive intensity.
    pub emissive: f32,
    pub has_ring: bool,
    pub has_night_texture: bool,
    /// Body whose position this one follows.
    pub parent: Option<BodyId>,
}

impl Body {
    /// Create a new body with the given ID at the origin.
    pub fn new(id: BodyId, kind: BodyKind) -> Self {
        Self {
            id,
            name: String::new(),
            kind,
            radius: 1.0,
            scale: 1.0,
            orbital_distance: 0.0,
            base_speed: 1.0,
            original_speed: 1.0,
            orbit_speed: 0.0,
            position: Vec3::ZERO,
            rotation_y: 0.0,
            tilt: 0.0,
            emissive: 0.0,
            has_ring: false,
            has_night_texture: false,
            parent: None,
        }
    }

    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Place the body on its orbit at angle zero: `(distance, 0, 0)`.
    pub fn with_orbit(mut self, distance: f32, orbit_speed: f32, base_speed: f32) -> Self {
        self.orbital_distance = distance;
        self.orbit_speed = orbit_speed;
        self.base_speed = base_speed;
        self.original_speed = base_speed;
        self.position = Vec3::new(distance, 0.0, 0.0);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_ring(mut self, has_ring: bool) -> Self {
        self.has_ring = has_ring;
        self
    }

    pub fn with_night_texture(mut self, has_night_texture: bool) -> Self {
        self.has_night_texture = has_night_texture;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Radius of the bounding sphere used for hit testing.
    pub fn bounding_radius(&self) -> f32 {
        self.radius * self.scale
    }

    pub fn is_pickable(&self) -> bool {
        self.kind == BodyKind::Planet
    }
}
