//! Tri-state scores and the personal value / political value vectors derived
//! from a concept's data properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::vocabulary::{PERSONAL_VALUES_10, PERSONAL_VALUES_19};

/// A tri-state score: `Some(1.0)`, `Some(-1.0)`, `Some(0.0)` or unset.
/// Other magnitudes are carried through but only ±1 are significant.
pub type Score = Option<f64>;

/// One ontology data property value. Only numbers take part in scoring and
/// ranking; text and booleans are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl DataValue {
    /// The numeric view: `None` unless the value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for DataValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Data property map of a concept: name → scalar or null.
pub type DataProperties = BTreeMap<String, DataValue>;

/// Collapse a group of tri-state scores to one.
///
/// All unset → unset. Otherwise 1 wins, then -1, then 0. A group holding
/// both 1 and -1 is an authoring error.
pub fn collapse(values: &[Score]) -> Result<Score, DomainError> {
    if values.iter().all(Option::is_none) {
        return Ok(None);
    }
    let one = values.iter().any(|v| *v == Some(1.0));
    let neg_one = values.iter().any(|v| *v == Some(-1.0));
    match (one, neg_one) {
        (true, true) => Err(DomainError::OpposingScores {
            values: values.to_vec(),
        }),
        (true, false) => Ok(Some(1.0)),
        (false, true) => Ok(Some(-1.0)),
        (false, false) => Ok(Some(0.0)),
    }
}

/// True when a score is set and non-zero.
pub fn is_significant(score: Score) -> bool {
    matches!(score, Some(v) if v != 0.0)
}

/// Read one data property; absent, null and non-numeric all read as unset.
pub fn data_score(data: &DataProperties, name: &str) -> Score {
    data.get(name).and_then(DataValue::as_f64)
}

/// The 19 fine-grained personal values in fixed order.
pub fn personal_values_19(data: &DataProperties) -> [Score; 19] {
    PERSONAL_VALUES_19.map(|name| data_score(data, name))
}

/// The 10 collapsed personal values in fixed order.
///
/// `node` only labels the error when a group holds opposing scores.
pub fn personal_values_10(data: &DataProperties, node: &str) -> Result<[Score; 10], DomainError> {
    let mut out = [None; 10];
    for (slot, group) in out.iter_mut().zip(PERSONAL_VALUES_10.iter()) {
        *slot = if group.is_singleton() {
            data_score(data, group.members[0])
        } else {
            let values: Vec<Score> = group.members.iter().map(|m| data_score(data, m)).collect();
            collapse(&values).map_err(|e| e.in_group(node, group.name))?
        };
    }
    Ok(out)
}

/// Political affinity pair in fixed order: (conservative, liberal).
/// Serialized positionally as `[conservative, liberal]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Score; 2]", into = "[Score; 2]")]
pub struct PoliticalValue {
    pub conservative: Score,
    pub liberal: Score,
}

impl PoliticalValue {
    pub fn from_data(data: &DataProperties, conservative: &str, liberal: &str) -> Self {
        Self {
            conservative: data_score(data, conservative),
            liberal: data_score(data, liberal),
        }
    }

    /// The pair as a positional array, conservative first.
    pub fn as_array(&self) -> [Score; 2] {
        [self.conservative, self.liberal]
    }
}

impl From<[Score; 2]> for PoliticalValue {
    fn from([conservative, liberal]: [Score; 2]) -> Self {
        Self {
            conservative,
            liberal,
        }
    }
}

impl From<PoliticalValue> for [Score; 2] {
    fn from(value: PoliticalValue) -> Self {
        value.as_array()
    }
}
