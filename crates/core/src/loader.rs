use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::StampConfig;
use crate::error::ConfigError;

/// Top-level shape of a userstamp configuration file.
///
/// # Example
///
/// ```toml
/// [userstamp]
/// creator_field = "created_by"
/// updater_field = "updated_by"
/// actor_accessor = "my_user"
/// ```
///
/// Every key is optional; omitted keys keep their defaults, and an empty
/// file yields [`StampConfig::default`].
#[derive(Debug, Default, Deserialize)]
pub struct StampConfigToml {
    #[serde(default)]
    pub userstamp: StampConfig,
}

/// Parse configuration from TOML text.
pub fn load_config_str(text: &str) -> Result<StampConfig, ConfigError> {
    let parsed: StampConfigToml = toml::from_str(text)?;
    for problem in parsed.userstamp.validate() {
        warn!(%problem, "userstamp configuration will never stamp");
    }
    Ok(parsed.userstamp)
}

/// Read and parse configuration from a TOML file.
pub fn load_config_file(path: &Path) -> Result<StampConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_config_str(&text)?;
    info!(
        path = %path.display(),
        creator_field = %config.creator_field,
        updater_field = %config.updater_field,
        actor_accessor = %config.actor_accessor,
        "loaded userstamp configuration"
    );
    Ok(config)
}
