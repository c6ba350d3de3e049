use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a curriculum phase (zero-based, one per month of the program).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhaseId(u8);

impl PhaseId {
    /// Creates a new `PhaseId`
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the underlying value
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Program-wide week number (weeks are numbered continuously across phases).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekNumber(u8);

impl WeekNumber {
    /// Creates a new `WeekNumber`
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the underlying value
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

impl fmt::Debug for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekNumber({})", self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing identifiers and checklist keys from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for PhaseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(PhaseId::new)
            .map_err(|_| ParseIdError { kind: "PhaseId" })
    }
}

impl FromStr for WeekNumber {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(WeekNumber::new)
            .map_err(|_| ParseIdError { kind: "WeekNumber" })
    }
}

// ─── Checklist keys ────────────────────────────────────────────────────────────

/// Storage key of one week's checklist record: `checklist-{phase}-{week}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChecklistKey {
    pub phase: PhaseId,
    pub week: WeekNumber,
}

impl ChecklistKey {
    /// Prefix shared by every checklist record in the key/value store.
    pub const PREFIX: &'static str = "checklist-";

    #[must_use]
    pub const fn new(phase: PhaseId, week: WeekNumber) -> Self {
        Self { phase, week }
    }

    /// Returns true if `raw` uses the checklist naming convention.
    ///
    /// This only checks the prefix; use `parse` to validate the full key.
    #[must_use]
    pub fn has_prefix(raw: &str) -> bool {
        raw.starts_with(Self::PREFIX)
    }
}

impl fmt::Display for ChecklistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", Self::PREFIX, self.phase, self.week)
    }
}

impl FromStr for ChecklistKey {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = ParseIdError {
            kind: "ChecklistKey",
        };
        let rest = s.strip_prefix(Self::PREFIX).ok_or(err.clone())?;
        let (phase, week) = rest.split_once('-').ok_or(err.clone())?;
        let phase = phase.parse::<PhaseId>().map_err(|_| err.clone())?;
        let week = week.parse::<WeekNumber>().map_err(|_| err.clone())?;
        let key = Self { phase, week };
        // Only the canonical spelling names a record; `00` or `+0` would alias it.
        if key.to_string() != s {
            return Err(err);
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_id_display() {
        assert_eq!(PhaseId::new(2).to_string(), "2");
    }

    #[test]
    fn test_week_number_from_str_invalid() {
        assert!("thirteen".parse::<WeekNumber>().is_err());
        assert!("300".parse::<WeekNumber>().is_err());
    }

    #[test]
    fn test_checklist_key_format() {
        let key = ChecklistKey::new(PhaseId::new(0), WeekNumber::new(1));
        assert_eq!(key.to_string(), "checklist-0-1");
    }

    #[test]
    fn test_checklist_key_parse() {
        let key: ChecklistKey = "checklist-2-13".parse().unwrap();
        assert_eq!(key.phase, PhaseId::new(2));
        assert_eq!(key.week, WeekNumber::new(13));
    }

    #[test]
    fn test_checklist_key_rejects_foreign_keys() {
        for raw in [
            "checklist-",
            "checklist-0",
            "checklist-a-1",
            "checklist-0-1-2",
            "theme",
            "Checklist-0-1",
            "checklist-00-1",
            "checklist-+0-1",
            "checklist-0-01",
            "checklist-0- 1",
        ] {
            assert!(raw.parse::<ChecklistKey>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn test_has_prefix_is_loose() {
        assert!(ChecklistKey::has_prefix("checklist-whatever"));
        assert!(!ChecklistKey::has_prefix("settings"));
    }
}
