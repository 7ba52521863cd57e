use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// The answer that marks a yes/no checklist item as done.
pub const YES: &str = "Yes";
/// The answer that marks a yes/no checklist item as explicitly not done.
pub const NO: &str = "No";

/// A single raw answer as submitted by a form widget.
///
/// Deserialization never fails: JSON that is not a string, an array or an
/// object lands in [`FormValue::Other`] (numeric inputs, switches, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FormValue {
    /// Radio, select, free text or date input.
    Text(String),
    /// Multi-select or checkbox group. Non-string items are dropped.
    List(Vec<String>),
    /// Per-item boolean flags. Non-boolean flags read as `false`.
    Flags(BTreeMap<String, bool>),
    Other(serde_json::Value),
}

impl FormValue {
    /// The value when it is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The string itself, or the first selected label of a list.
    pub fn first(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s.as_str()),
            FormValue::List(items) => items.first().map(String::as_str),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&BTreeMap<String, bool>> {
        match self {
            FormValue::Flags(flags) => Some(flags),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        self.as_text() == Some(YES)
    }

    /// `"Yes"`, or any non-empty answer other than `"No"`. A number counts
    /// unless it is zero, a boolean only when `true`, `null` never.
    pub fn is_answered(&self) -> bool {
        let answered = |s: &str| !s.is_empty() && s != NO;
        match self {
            FormValue::Text(s) => answered(s.as_str()),
            FormValue::List(items) => items.iter().any(|s| answered(s.as_str())),
            FormValue::Flags(flags) => flags.values().any(|set| *set),
            FormValue::Other(serde_json::Value::Bool(set)) => *set,
            FormValue::Other(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
            FormValue::Other(_) => false,
        }
    }
}

impl From<serde_json::Value> for FormValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => FormValue::Text(s),
            Value::Array(items) => FormValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Object(map) => FormValue::Flags(
                map.into_iter()
                    .map(|(k, v)| (k, v.as_bool().unwrap_or(false)))
                    .collect(),
            ),
            other => FormValue::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for FormValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(FormValue::from)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        FormValue::List(items)
    }
}

impl From<BTreeMap<String, bool>> for FormValue {
    fn from(flags: BTreeMap<String, bool>) -> Self {
        FormValue::Flags(flags)
    }
}

/// Field name → raw answer, as assembled by the client from one form.
///
/// The key set differs per audit type. A missing key is "not completed".
/// As a newtype it reads and writes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditFormValues(BTreeMap<String, FormValue>);

impl AuditFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FormValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FormValue> {
        self.0.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FormValue::as_text)
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FormValue::first)
    }

    /// Like [`first`](Self::first), but an empty selection reads as missing.
    pub fn selected(&self, field: &str) -> Option<&str> {
        self.first(field).filter(|s| !s.is_empty())
    }

    pub fn flags(&self, field: &str) -> Option<&BTreeMap<String, bool>> {
        self.get(field).and_then(FormValue::as_flags)
    }

    pub fn is_yes(&self, field: &str) -> bool {
        self.get(field).is_some_and(FormValue::is_yes)
    }

    pub fn is_answered(&self, field: &str) -> bool {
        self.get(field).is_some_and(FormValue::is_answered)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AuditFormValues
where
    K: Into<String>,
    V: Into<FormValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
