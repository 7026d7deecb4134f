use serde::Serialize;

/// Completion ratio of a topic collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

impl Progress {
    /// Builds a progress record, rounding the percentage half up.
    ///
    /// A zero `total` yields 0%.
    #[must_use]
    pub fn from_counts(completed: u32, total: u32) -> Self {
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    /// Progress of an unknown or empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = u64::from(completed);
    let total = u64::from(total);
    // round(100 * c / t) with ties going up: floor((200c + t) / 2t)
    let rounded = (200 * completed + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_zero_percent() {
        assert_eq!(Progress::from_counts(0, 0), Progress::empty());
    }

    #[test]
    fn rounds_to_nearest_percent() {
        assert_eq!(Progress::from_counts(1, 3).percentage, 33);
        assert_eq!(Progress::from_counts(2, 3).percentage, 67);
        assert_eq!(Progress::from_counts(1, 25).percentage, 4);
        assert_eq!(Progress::from_counts(25, 25).percentage, 100);
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(Progress::from_counts(1, 8).percentage, 13);
        assert_eq!(Progress::from_counts(1, 200).percentage, 1);
    }

    #[test]
    fn complete_only_when_all_done() {
        assert!(Progress::from_counts(3, 3).is_complete());
        assert!(!Progress::from_counts(2, 3).is_complete());
        assert!(!Progress::empty().is_complete());
    }
}
