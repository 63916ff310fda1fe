//! Shared building blocks for creator/updater stamping.
//!
//! [`StampRegistry`] holds the configured field and accessor names,
//! [`Stampable`] and [`ActorContext`] describe what the stamper needs from a
//! record and from the surrounding request.

pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod record;
pub mod registry;

pub use config::{
    DEFAULT_ACTOR_ACCESSOR, DEFAULT_CREATOR_FIELD, DEFAULT_UPDATER_FIELD, StampConfig,
};
pub use context::{Accessor, ActorContext, RequestContext, Visibility};
pub use error::ConfigError;
pub use loader::{StampConfigToml, load_config_file, load_config_str};
pub use record::{JsonRecord, Stampable};
pub use registry::StampRegistry;
