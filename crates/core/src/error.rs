use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading stamp configuration.
///
/// Stamping itself never fails: a missing actor or field is an ordinary
/// outcome, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`crate::StampConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
