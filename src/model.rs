//! Wire types
//!
//! Bodies returned by the activities API. `GET /activities` returns a JSON
//! object keyed by activity name; the POST endpoints return a small object
//! with either `message` (success) or `detail` (error).
//!
//! Text fields are read leniently: `null`, `false`, `0` and `""` become an
//! empty string, and any other non-string value is shown as its JSON text.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Details of a single activity
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub schedule: String,

    /// Any JSON number; fractional capacities are kept as sent
    pub max_participants: f64,

    /// Participant emails in sign-up order
    #[serde(default, deserialize_with = "lenient_participants")]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Remaining capacity. Computed only; negative when over-subscribed.
    pub fn spots_left(&self) -> f64 {
        self.max_participants - self.participants.len() as f64
    }
}

/// The activity mapping, in the order a browser enumerates the object:
/// integer-like keys ascending first, then the rest in server order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities(Vec<(String, ActivityDetails)>);

impl Activities {
    pub fn new(entries: Vec<(String, ActivityDetails)>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityDetails)> {
        self.0.iter().map(|(name, details)| (name.as_str(), details))
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

/// Keys a JS engine treats as array indices: canonical decimal below 2^32 - 1
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, ActivityDetails)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    // Later duplicates win, like a JS object literal
                    match entries.iter().position(|(n, _)| *n == name) {
                        Some(idx) => entries[idx].1 = details,
                        None => entries.push((name, details)),
                    }
                }

                // Stable: non-index keys keep their relative order
                entries.sort_by_key(|(name, _)| match array_index(name) {
                    Some(idx) => (0, idx),
                    None => (1, 0),
                });
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

impl Serialize for Activities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, details) in &self.0 {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

/// Body of the signup and unregister responses
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub message: Option<String>,

    /// Usually a string; validation errors send an array of objects
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub detail: Option<String>,
}

/// Display text for a JSON number: integral values without a fraction
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Text for an arbitrary JSON value; falsy values give `None`
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => None,
            Some(f) => Some(format_number(f)),
            None => Some(n.to_string()),
        },
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Anything other than an array counts as no participants; non-string
/// entries keep their JSON text.
fn lenient_participants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let participants = match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(participants)
}
