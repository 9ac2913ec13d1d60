use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a body manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected {expected} planets, found {found}")]
    PlanetCount { expected: usize, found: usize },

    #[error("planet #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{name}: size must be positive, got {size}")]
    InvalidSize { name: String, size: f32 },

    #[error("{name}: orbital distance must be non-negative, got {distance}")]
    InvalidDistance { name: String, distance: f32 },

    #[error("{name}: orbit speed must be positive, got {orbit_speed}")]
    InvalidOrbitSpeed { name: String, orbit_speed: f32 },
}

/// Body table describing the sun and every planet.
/// Field names follow the host's JSON (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyManifest {
    #[serde(default)]
    pub sun: SunDescriptor,
    pub planets: Vec<PlanetDescriptor>,
    /// Texture for the backdrop sphere.
    #[serde(default)]
    pub starfield_texture: Option<String>,
}

/// The central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunDescriptor {
    #[serde(default = "default_sun_name")]
    pub name: String,
    #[serde(default = "default_sun_radius")]
    pub radius: f32,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub glow_texture: Option<String>,
}

impl Default for SunDescriptor {
    fn default() -> Self {
        Self {
            name: default_sun_name(),
            radius: default_sun_radius(),
            texture: None,
            glow_texture: None,
        }
    }
}

/// One orbiting planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetDescriptor {
    pub name: String,
    /// Sphere radius.
    pub size: f32,
    /// Orbit radius.
    pub distance: f32,
    /// Default speed multiplier (the slider's initial value).
    pub speed: f32,
    /// Fixed angular rate constant.
    pub orbit_speed: f32,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub night_texture: Option<String>,
    #[serde(default)]
    pub has_ring: bool,
    #[serde(default)]
    pub ring_texture: Option<String>,
}

impl PlanetDescriptor {
    pub fn has_night_texture(&self) -> bool {
        self.night_texture.is_some()
    }
}

fn default_sun_name() -> String {
    "Sun".to_string()
}

fn default_sun_radius() -> f32 {
    3.0
}

impl BodyManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to JSON for the host's scene assembly.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the table against the body invariants.
    pub fn validate(&self, expected_planets: usize) -> Result<(), ManifestError> {
        if self.planets.len() != expected_planets {
            return Err(ManifestError::PlanetCount {
                expected: expected_planets,
                found: self.planets.len(),
            });
        }
        if !(self.sun.radius > 0.0) {
            return Err(ManifestError::InvalidSize {
                name: self.sun.name.clone(),
                size: self.sun.radius,
            });
        }

        let mut names: HashSet<&str> = HashSet::new();
        names.insert(self.sun.name.as_str());

        for (index, planet) in self.planets.iter().enumerate() {
            if planet.name.trim().is_empty() {
                return Err(ManifestError::EmptyName { index });
            }
            if !names.insert(planet.name.as_str()) {
                return Err(ManifestError::DuplicateName(planet.name.clone()));
            }
            if !(planet.size > 0.0) {
                return Err(ManifestError::InvalidSize {
                    name: planet.name.clone(),
                    size: planet.size,
                });
            }
            if !(planet.distance >= 0.0) {
                return Err(ManifestError::InvalidDistance {
                    name: planet.name.clone(),
                    distance: planet.distance,
                });
            }
            if !(planet.orbit_speed > 0.0) {
                return Err(ManifestError::InvalidOrbitSpeed {
                    name: planet.name.clone(),
                    orbit_speed: planet.orbit_speed,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PLANETS: &str = r#"{
        "sun": { "radius": 3.0, "texture": "assets/textures/8k_sun.jpg" },
        "planets": [
            { "name": "Earth", "size": 0.6, "distance": 10, "speed": 0.7, "orbitSpeed": 0.0015,
              "texture": "earth.jpg", "nightTexture": "earth_night.jpg" },
            { "name": "Saturn", "size": 1.0, "distance": 25, "speed": 0.3, "orbitSpeed": 0.0005,
              "hasRing": true, "ringTexture": "ring.png" }
        ]
    }"#;

    #[test]
    fn parse_planet_table() {
        let manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        assert_eq!(manifest.planets.len(), 2);

        let earth = &manifest.planets[0];
        assert_eq!(earth.orbit_speed, 0.0015);
        assert!(earth.has_night_texture());
        assert!(!earth.has_ring);

        let saturn = &manifest.planets[1];
        assert!(saturn.has_ring);
        assert_eq!(saturn.ring_texture.as_deref(), Some("ring.png"));
        assert!(manifest.validate(2).is_ok());
    }

    #[test]
    fn sun_section_is_optional() {
        let manifest = BodyManifest::from_json(r#"{ "planets": [] }"#).unwrap();
        assert_eq!(manifest.sun.name, "Sun");
        assert_eq!(manifest.sun.radius, 3.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = BodyManifest::from_json("{ planets: ").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn wrong_planet_count_is_rejected() {
        let manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        let err = manifest.validate(8).unwrap_err();
        assert!(matches!(err, ManifestError::PlanetCount { expected: 8, found: 2 }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        manifest.planets[1].name = "Earth".to_string();
        let err = manifest.validate(2).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName(ref n) if n == "Earth"));
    }

    #[test]
    fn planet_named_like_the_sun_is_rejected() {
        let mut manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        manifest.planets[0].name = "Sun".to_string();
        assert!(matches!(manifest.validate(2), Err(ManifestError::DuplicateName(_))));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let mut manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        manifest.planets[0].size = 0.0;
        assert!(matches!(manifest.validate(2), Err(ManifestError::InvalidSize { .. })));

        let mut manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        manifest.planets[0].orbit_speed = -0.1;
        assert!(matches!(manifest.validate(2), Err(ManifestError::InvalidOrbitSpeed { .. })));

        let mut manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        manifest.planets[1].distance = f32::NAN;
        assert!(matches!(manifest.validate(2), Err(ManifestError::InvalidDistance { .. })));
    }

    #[test]
    fn json_round_trip_keeps_camel_case() {
        let manifest = BodyManifest::from_json(TWO_PLANETS).unwrap();
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"orbitSpeed\""));
        assert!(json.contains("\"nightTexture\""));
        assert_eq!(BodyManifest::from_json(&json).unwrap(), manifest);
    }
}
