use serde::{Deserialize, Serialize};

/// Default name of the field that records who created a record.
pub const DEFAULT_CREATOR_FIELD: &str = "creator";
/// Default name of the field that records who last updated a record.
pub const DEFAULT_UPDATER_FIELD: &str = "updater";
/// Default name of the accessor that yields the acting user.
pub const DEFAULT_ACTOR_ACCESSOR: &str = "current_user";

/// Names used when stamping records.
///
/// The stamper looks up `creator_field` and `updater_field` on each record and
/// `actor_accessor` on the request context. Names are never validated against
/// any record or context: a name nothing answers to simply stamps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampConfig {
    /// Field written with the actor when the record is new.
    #[serde(default = "default_creator_field")]
    pub creator_field: String,
    /// Field written with the actor when the record has changed.
    #[serde(default = "default_updater_field")]
    pub updater_field: String,
    /// Accessor on the request context that yields the current actor.
    #[serde(default = "default_actor_accessor")]
    pub actor_accessor: String,
}

fn default_creator_field() -> String {
    DEFAULT_CREATOR_FIELD.to_owned()
}

fn default_updater_field() -> String {
    DEFAULT_UPDATER_FIELD.to_owned()
}

fn default_actor_accessor() -> String {
    DEFAULT_ACTOR_ACCESSOR.to_owned()
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            creator_field: default_creator_field(),
            updater_field: default_updater_field(),
            actor_accessor: default_actor_accessor(),
        }
    }
}

impl StampConfig {
    /// Set the creator field name.
    #[must_use]
    pub fn with_creator_field(mut self, name: impl Into<String>) -> Self {
        self.creator_field = name.into();
        self
    }

    /// Set the updater field name.
    #[must_use]
    pub fn with_updater_field(mut self, name: impl Into<String>) -> Self {
        self.updater_field = name.into();
        self
    }

    /// Set the actor accessor name.
    #[must_use]
    pub fn with_actor_accessor(mut self, name: impl Into<String>) -> Self {
        self.actor_accessor = name.into();
        self
    }

    /// Setter-style name for the creator field, e.g. `"creator="`.
    ///
    /// The stamper passes plain field names to
    /// [`Stampable::accepts_field`](crate::Stampable::accepts_field); this is a
    /// helper for records that key their setters by `name=` instead.
    pub fn creator_assignment(&self) -> String {
        format!("{}=", self.creator_field)
    }

    /// Setter-style name for the updater field, e.g. `"updater="`.
    ///
    /// See [`creator_assignment`](Self::creator_assignment).
    pub fn updater_assignment(&self) -> String {
        format!("{}=", self.updater_field)
    }

    /// List settings that can never match anything.
    ///
    /// An empty name is accepted (stamping degrades to a no-op) but is almost
    /// certainly a configuration mistake, so loaders report it.
    pub fn validate(&self) -> Vec<String> {
        [
            ("creator_field", &self.creator_field),
            ("updater_field", &self.updater_field),
            ("actor_accessor", &self.actor_accessor),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| format!("{key} is empty; nothing will be stamped through it"))
        .collect()
    }
}
