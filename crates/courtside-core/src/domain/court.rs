use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A court belonging to one club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Court(Value);

impl Court {
    /// Creates a court record with an `id` and a `name`.
    #[must_use]
    pub fn new(id: impl Into<Value>, name: &str) -> Self {
        Self(json!({ "id": id.into(), "name": name }))
    }

    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

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

impl From<Value> for Court {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let raw = r#"[{"id":9,"name":"Cancha 1","sports":["padel"],"surface":null}]"#;

        let courts: Vec<Court> = serde_json::from_str(raw).unwrap();
        assert_eq!(courts[0].name(), Some("Cancha 1"));
        assert_eq!(courts[0].get("surface"), Some(&Value::Null));
        assert_eq!(serde_json::to_string(&courts).unwrap(), raw);
    }

    #[test]
    fn test_new() {
        let court = Court::new(3, "Cancha 3");
        assert_eq!(court.id(), Some(&json!(3)));
        assert_eq!(court.name(), Some("Cancha 3"));
    }
}
