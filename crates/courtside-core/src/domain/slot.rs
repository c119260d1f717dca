use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A bookable time window on one court for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(Value);

impl Slot {
    /// Creates a slot record spanning `start..end`.
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self(json!({ "start": start, "end": end }))
    }

    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.0.get("start").and_then(Value::as_str)
    }

    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.0.get("end").and_then(Value::as_str)
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

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Calendar date at day granularity, written as `YYYY-MM-DD`.
///
/// Converting from a timestamp keeps the UTC calendar date and drops the time
/// of day, so every instant within one UTC day maps to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotDate(NaiveDate);

impl SlotDate {
    /// Returns the inner calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SlotDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateTime<Utc>> for SlotDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }
}

impl FromStr for SlotDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

impl Display for SlotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
