//! Error types. Scoring itself is total; only configuration and
//! serialization surfaces can fail.

mod config_error;

pub use config_error::ConfigError;

/// Top-level error for the Skillguard workspace.
#[derive(Debug, thiserror::Error)]
pub enum SkillguardError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    SerializationError { reason: String },
}

impl From<serde_json::Error> for SkillguardError {
    fn from(err: serde_json::Error) -> Self {
        SkillguardError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SkillguardError {
    fn from(err: toml::ser::Error) -> Self {
        SkillguardError::SerializationError {
            reason: err.to_string(),
        }
    }
}

pub type SkillguardResult<T> = Result<T, SkillguardError>;
