//! Per-cell letter status

/// Status of a single letter cell (or of a key on the keyboard)
///
/// `Empty` and `Typing` only describe grid cells that have not been scored yet;
/// evaluation produces `Correct`, `Present` or `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target at another position
    Present,
    /// Letter does not occur (or all occurrences are already accounted for)
    Absent,
    /// Nothing entered
    #[default]
    Empty,
    /// Entered in the active row, not submitted yet
    Typing,
}

impl LetterStatus {
    /// Aggregation rank: `Correct` > `Present` > `Absent` > `Empty` = `Typing`
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Typing => 0,
        }
    }

    /// True if `self` carries strictly more information than `other`
    #[inline]
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.rank() > other.rank()
    }

    /// True for the three statuses produced by evaluation
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Emoji tile used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty | Self::Typing => '⬜',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_order() {
        assert!(LetterStatus::Correct.outranks(LetterStatus::Present));
        assert!(LetterStatus::Present.outranks(LetterStatus::Absent));
        assert!(LetterStatus::Absent.outranks(LetterStatus::Empty));
        assert!(LetterStatus::Absent.outranks(LetterStatus::Typing));
    }

    #[test]
    fn empty_and_typing_tie() {
        assert!(!LetterStatus::Empty.outranks(LetterStatus::Typing));
        assert!(!LetterStatus::Typing.outranks(LetterStatus::Empty));
        assert_eq!(LetterStatus::Empty.rank(), LetterStatus::Typing.rank());
    }

    #[test]
    fn never_outranks_itself() {
        for status in [
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Absent,
            LetterStatus::Empty,
            LetterStatus::Typing,
        ] {
            assert!(!status.outranks(status));
        }
    }

    #[test]
    fn scored_statuses() {
        assert!(LetterStatus::Correct.is_scored());
        assert!(LetterStatus::Absent.is_scored());
        assert!(!LetterStatus::Empty.is_scored());
        assert!(!LetterStatus::Typing.is_scored());
    }
}
