/// Checked vs. possible checklist items, with the rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub checked: usize,
    pub total: usize,
    pub percent: u8,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(checked: usize, total: usize) -> Self {
        Self {
            checked,
            total,
            percent: percent(checked, total),
        }
    }

    /// The zero state shown before the first computation.
    #[must_use]
    pub fn empty(total: usize) -> Self {
        Self::new(0, total)
    }
}

/// `round(100 * checked / total)`, rounding halves up, clamped to `0..=100`.
///
/// A zero `total` yields 0.
#[must_use]
pub fn percent(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let checked = checked.min(total) as u128;
    let total = total as u128;
    let rounded = (200 * checked + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
