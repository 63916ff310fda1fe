use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// A record the stamper can inspect and write to.
///
/// Field support is tested by name, so one implementation can serve any
/// configured field names. A record that does not carry a field answers
/// `false` from [`accepts_field`](Self::accepts_field) and the stamper never
/// calls [`assign_field`](Self::assign_field) for it.
pub trait Stampable {
    /// The value written into stamp fields.
    type Actor;

    /// Whether the record has never been persisted.
    fn is_new_record(&self) -> bool;

    /// Whether the record differs from its last persisted state.
    fn is_changed(&self) -> bool;

    /// Whether the record exposes a settable field called `field`.
    fn accepts_field(&self, field: &str) -> bool;

    /// Overwrite `field` with `actor`.
    ///
    /// Only called after [`accepts_field`](Self::accepts_field) returned `true`
    /// for the same name.
    fn assign_field(&mut self, field: &str, actor: Self::Actor);
}

/// A schemaless record with a fixed set of columns and dirty tracking.
///
/// Writing a value equal to the current one is not a change, matching how
/// ORMs track dirty attributes. Stamp writes are tracked like any other
/// write, so a stamped creator makes a new record count as changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRecord {
    values: Map<String, Value>,
    persisted: bool,
    dirty: BTreeSet<String>,
}

impl JsonRecord {
    /// Create an unsaved record with the given columns, all `null`.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = columns
            .into_iter()
            .map(|c| (c.into(), Value::Null))
            .collect();
        Self {
            values,
            persisted: false,
            dirty: BTreeSet::new(),
        }
    }

    /// Load a record as previously persisted: not new, not changed.
    pub fn persisted(values: Map<String, Value>) -> Self {
        Self {
            values,
            persisted: true,
            dirty: BTreeSet::new(),
        }
    }

    /// Set a column. Returns `false` if the record has no such column.
    pub fn set(&mut self, column: &str, value: Value) -> bool {
        let Some(slot) = self.values.get_mut(column) else {
            return false;
        };
        if *slot != value {
            *slot = value;
            self.dirty.insert(column.to_owned());
        }
        true
    }

    /// Current value of `column`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Whether the record has a column called `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Columns written since the record was loaded or last persisted.
    pub fn changed_columns(&self) -> impl Iterator<Item = &str> {
        self.dirty.iter().map(String::as_str)
    }

    /// Record a successful save.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
        self.dirty.clear();
    }

    /// All columns as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

impl Stampable for JsonRecord {
    type Actor = Value;

    fn is_new_record(&self) -> bool {
        !self.persisted
    }

    fn is_changed(&self) -> bool {
        !self.dirty.is_empty()
    }

    fn accepts_field(&self, field: &str) -> bool {
        self.has_column(field)
    }

    fn assign_field(&mut self, field: &str, actor: Value) {
        self.set(field, actor);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_record_is_new_and_clean() {
        let record = JsonRecord::new(["body", "creator"]);
        assert!(record.is_new_record());
        assert!(!record.is_changed());
        assert_eq!(record.get("body"), Some(&Value::Null));
    }

    #[test]
    fn set_marks_dirty() {
        let mut record = JsonRecord::new(["body"]);
        assert!(record.set("body", json!("hello")));
        assert!(record.is_changed());
        assert_eq!(record.changed_columns().collect::<Vec<_>>(), vec!["body"]);
    }

    #[test]
    fn set_unknown_column_is_refused() {
        let mut record = JsonRecord::new(["body"]);
        assert!(!record.set("title", json!("x")));
        assert!(!record.is_changed());
        assert!(record.get("title").is_none());
    }

    #[test]
    fn writing_same_value_is_not_a_change() {
        let mut values = Map::new();
        values.insert("body".into(), json!("same"));
        let mut record = JsonRecord::persisted(values);
        record.set("body", json!("same"));
        assert!(!record.is_changed());
        assert!(!record.is_new_record());
    }

    #[test]
    fn mark_persisted_clears_state() {
        let mut record = JsonRecord::new(["body"]);
        record.set("body", json!(1));
        record.mark_persisted();
        assert!(!record.is_new_record());
        assert!(!record.is_changed());
        assert_eq!(record.to_value(), json!({"body": 1}));
    }

    #[test]
    fn capability_test_uses_column_names() {
        let mut record = JsonRecord::new(["created_by"]);
        assert!(record.accepts_field("created_by"));
        assert!(!record.accepts_field("creator"));
        record.assign_field("created_by", json!(220));
        assert_eq!(record.get("created_by"), Some(&json!(220)));
    }
}
