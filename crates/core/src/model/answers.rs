use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::FieldName;

/// A recorded answer: a scale value, or free text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Scale(i64),
    Text(String),
}

impl AnswerValue {
    /// The value as it counts toward a score, if it is numeric.
    ///
    /// Text counts when it parses as an integer once trimmed.
    #[must_use]
    pub fn as_score(&self) -> Option<i64> {
        match self {
            AnswerValue::Scale(value) => Some(*value),
            AnswerValue::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Scale(value)
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        Self::Scale(i64::from(value))
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Scale(value) => write!(f, "{value}"),
            AnswerValue::Text(text) => f.write_str(text),
        }
    }
}

/// Session-scoped answers keyed by field name.
///
/// Recording overwrites the previous value for the same field. Entries are
/// never removed, and iteration follows field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    values: BTreeMap<FieldName, AnswerValue>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn record(
        &mut self,
        field_name: FieldName,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.values.insert(field_name, value.into())
    }

    #[must_use]
    pub fn get(&self, field_name: &str) -> Option<&AnswerValue> {
        self.values.get(field_name)
    }

    #[must_use]
    pub fn contains(&self, field_name: &str) -> bool {
        self.values.contains_key(field_name)
    }

    /// Full copy of the current answers.
    #[must_use]
    pub fn snapshot(&self) -> AnswerStore {
        self.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldName, AnswerValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a AnswerStore {
    type Item = (&'a FieldName, &'a AnswerValue);
    type IntoIter = btree_map::Iter<'a, FieldName, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
