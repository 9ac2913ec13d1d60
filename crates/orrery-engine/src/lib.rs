pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::sim::{Simulation, SimConfig, SimContext};
pub use api::error::SimError;
pub use api::types::{BodyId, SimEvent, FrameTime};
pub use components::body::{Body, BodyKind};
pub use core::scene::Scene;
pub use core::time::Clock;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{BodyInstance, TransformBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{BodyManifest, ManifestError, PlanetDescriptor, SunDescriptor};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use systems::picking::{PickHit, Ray};
pub use systems::render::build_transform_buffer;
pub use systems::guides::{build_guide_buffer, orbit_guide};
