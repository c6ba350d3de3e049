use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a persisted checklist value could not be used.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    #[error("checklist value is not a JSON array of booleans: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("checklist has {actual} items, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Completion flags of one week's checklist, in content order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    items: Vec<bool>,
}

impl ChecklistState {
    /// A checklist of `len` unchecked items.
    #[must_use]
    pub fn all_clear(len: usize) -> Self {
        Self {
            items: vec![false; len],
        }
    }

    #[must_use]
    pub fn from_items(items: Vec<bool>) -> Self {
        Self { items }
    }

    /// Decode a stored JSON value without any shape expectation.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Malformed` if `raw` is not a JSON array of booleans.
    pub fn decode(raw: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode a stored JSON value that must hold exactly `expected` items.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if `raw` is malformed or has the wrong length.
    pub fn decode_sized(raw: &str, expected: usize) -> Result<Self, RecordError> {
        let state = Self::decode(raw)?;
        if state.len() != expected {
            return Err(RecordError::LengthMismatch {
                expected,
                actual: state.len(),
            });
        }
        Ok(state)
    }

    /// JSON encoding used for persistence, e.g. `[true,false,false]`.
    #[must_use]
    pub fn encode(&self) -> String {
        // A Vec<bool> always serializes.
        serde_json::to_string(&self.items).unwrap_or_else(|_| String::from("[]"))
    }

    /// Flip the item at `index`. Returns false (and changes nothing) when out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                *item = !*item;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.items.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|done| **done).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every item is checked (an empty checklist is never complete).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|done| *done)
    }

    #[must_use]
    pub fn items(&self) -> &[bool] {
        &self.items
    }
}
