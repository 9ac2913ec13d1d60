use thiserror::Error;

use crate::assets::manifest::ManifestError;

/// Fatal errors raised while bringing a simulation up.
///
/// The frame loop itself never fails; these only surface from `Simulation::init`.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid body manifest: {0}")]
    Manifest(#[from] ManifestError),

    #[error("required body missing from scene: {0}")]
    MissingBody(String),
}
