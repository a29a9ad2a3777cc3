//! Error types for scene generation.
//!
//! Generation itself has no external failure modes; what can go wrong is a
//! configuration that would produce empty or NaN-filled geometry, or a
//! configuration file that cannot be read. Backend failures are the
//! backend's own and travel as `anyhow::Error`.

/// Errors raised at generation entry points and while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A tunable is outside the range the generators can work with.
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::config::SceneConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] toml::de::Error),
}

impl SceneError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SceneError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
