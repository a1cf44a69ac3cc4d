//! Option model for picker columns
//!
//! An option is an opaque value plus a `disabled` flag. Values are stored as
//! [`serde_json::Value`] so an option can be a plain scalar or a structured
//! record; display text is derived through a configurable key lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selectable entry in a picker column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerOption {
    /// The opaque option value (plain scalar or structured record)
    pub value: Value,
    /// Disabled entries are skipped when resolving a selection
    #[serde(default)]
    pub disabled: bool,
}

impl PickerOption {
    /// Create an enabled option from any JSON-representable value
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    /// Create an enabled option with plain text as its value
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Value::String(text.into()))
    }

    /// Mark this option as disabled
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Derive the display text for this option.
    ///
    /// If the value is a record containing `value_key`, that field is
    /// rendered; otherwise the whole value is rendered. Strings render
    /// without surrounding quotes. A missing or non-applicable key degrades
    /// to the whole-value rendition rather than failing.
    pub fn display_text(&self, value_key: &str) -> String {
        match &self.value {
            Value::Object(fields) => match fields.get(value_key) {
                Some(field) => render_text(field),
                None => render_text(&self.value),
            },
            other => render_text(other),
        }
    }
}

impl From<Value> for PickerOption {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_text_renders_unquoted() {
        let option = PickerOption::text("Monday");
        assert_eq!(option.display_text("label"), "Monday");
    }

    #[test]
    fn record_uses_value_key() {
        let option = PickerOption::new(json!({ "label": "Tuesday", "id": 2 }));
        assert_eq!(option.display_text("label"), "Tuesday");
    }

    #[test]
    fn record_without_key_degrades_to_whole_value() {
        let option = PickerOption::new(json!({ "id": 2 }));
        assert_eq!(option.display_text("label"), r#"{"id":2}"#);
    }

    #[test]
    fn scalar_values_render_via_json() {
        assert_eq!(PickerOption::new(7).display_text("label"), "7");
        assert_eq!(PickerOption::new(true).display_text("label"), "true");
    }

    #[test]
    fn disable_sets_flag() {
        assert!(PickerOption::text("x").disable().disabled);
        assert!(!PickerOption::text("x").disabled);
    }
}
