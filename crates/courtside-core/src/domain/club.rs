use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A sports club listed for a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Club(Value);

impl Club {
    /// Creates a club record with an `id` and a `name`.
    #[must_use]
    pub fn new(id: impl Into<Value>, name: &str) -> Self {
        Self(json!({ "id": id.into(), "name": name }))
    }

    /// Upstream identifier, in whatever JSON form it was sent.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Display name, when the upstream sent it as a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Any attribute by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Club {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_round_trips_byte_equal() {
        let raw = r#"[{"name":"Padel Norte","id":1,"permalink":"padel-norte","location":{"lng":-58.4,"lat":-34.6}}]"#;

        let clubs: Vec<Club> = serde_json::from_str(raw).unwrap();
        assert_eq!(clubs[0].id(), Some(&json!(1)));
        assert_eq!(clubs[0].name(), Some("Padel Norte"));
        assert_eq!(clubs[0].get("permalink"), Some(&json!("padel-norte")));

        assert_eq!(serde_json::to_string(&clubs).unwrap(), raw);
    }

    #[test]
    fn test_null_and_non_string_fields_are_kept() {
        let raw = r#"[{"id":1,"name":null,"logo":"x.png"},{"id":2,"name":42}]"#;

        let clubs: Vec<Club> = serde_json::from_str(raw).unwrap();
        assert_eq!(clubs[0].name(), None);
        assert_eq!(clubs[1].name(), None);
        assert_eq!(clubs[1].get("name"), Some(&json!(42)));

        assert_eq!(serde_json::to_string(&clubs).unwrap(), raw);
    }

    #[test]
    fn test_unusual_ids_are_kept() {
        let raw = r#"[{"id":1.0},{"id":18446744073709551615},{"id":"club-7"}]"#;

        let clubs: Vec<Club> = serde_json::from_str(raw).unwrap();
        assert_eq!(clubs[2].id(), Some(&json!("club-7")));
        assert_eq!(serde_json::to_string(&clubs).unwrap(), raw);
    }

    #[test]
    fn test_empty_sequence_round_trip() {
        let text = serde_json::to_string(&Vec::<Club>::new()).unwrap();
        assert_eq!(text, "[]");
        let clubs: Vec<Club> = serde_json::from_str(&text).unwrap();
        assert!(clubs.is_empty());
    }
}
