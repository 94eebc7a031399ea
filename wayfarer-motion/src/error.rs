use thiserror::Error;
use wayfarer_config::ConfigGuardRailError;
use wayfarer_model::ModelError;

/// Construction-time failures. Once built, engines never fail: stale
/// callbacks and degenerate inputs degrade silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid motion tuning: {0}")]
    Config(#[from] ConfigGuardRailError),
    #[error("invalid panel geometry: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, MotionError>;
