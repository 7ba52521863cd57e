use std::collections::BTreeMap;

use audit_core::models::form::{AuditFormValues, FormValue};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a single checklist answer is judged complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "accepted", rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionRule {
    /// Only the literal `"Yes"`.
    Yes,
    /// `"Yes"`, or any non-empty answer other than `"No"` (free text, dates,
    /// radio options).
    Answered,
    /// One of a fixed set of option strings, matched exactly.
    OneOf(Vec<String>),
}

impl CompletionRule {
    pub fn one_of(options: &[&str]) -> Self {
        CompletionRule::OneOf(options.iter().map(|o| o.to_string()).collect())
    }

    pub fn is_met(&self, value: Option<&FormValue>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            CompletionRule::Yes => value.is_yes(),
            CompletionRule::Answered => value.is_answered(),
            CompletionRule::OneOf(accepted) => value
                .as_text()
                .is_some_and(|text| accepted.iter().any(|a| a == text)),
        }
    }
}

/// One item on an audit checklist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistField {
    pub id: String,
    pub label: String,
    pub critical: bool,
    pub rule: CompletionRule,
}

impl ChecklistField {
    pub fn new(id: &str, label: &str, rule: CompletionRule) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            critical: false,
            rule,
        }
    }

    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    pub fn is_completed(&self, values: &AuditFormValues) -> bool {
        self.rule.is_met(values.get(&self.id))
    }
}

/// A named, ordered set of fields scored as a unit (a bundle, a task group).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub fields: Vec<ChecklistField>,
    pub description: Option<String>,
}

impl Checklist {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn critical_fields(&self) -> impl Iterator<Item = &ChecklistField> {
        self.fields.iter().filter(|f| f.critical)
    }

    pub fn regular_fields(&self) -> impl Iterator<Item = &ChecklistField> {
        self.fields.iter().filter(|f| !f.critical)
    }

    /// Completion flag for every field, keyed by field id.
    pub fn completion(&self, values: &AuditFormValues) -> BTreeMap<String, bool> {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.is_completed(values)))
            .collect()
    }
}

/// Tally of completed fields against a field count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub completed: u32,
    pub total: u32,
}

impl Tally {
    pub fn of<'a>(
        fields: impl IntoIterator<Item = &'a ChecklistField>,
        values: &AuditFormValues,
    ) -> Self {
        fields.into_iter().fold(Tally::default(), |mut tally, field| {
            tally.total += 1;
            if field.is_completed(values) {
                tally.completed += 1;
            }
            tally
        })
    }

    /// Completed share in `[0, 1]`; zero for an empty tally.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total)
        }
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
