/// How a call to `sort` ended.
///
/// Cancellation is a regular way for a sort to end and not an error. A
/// cancelled sequence is left partially sorted but is still a permutation of
/// its initial contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub enum Outcome {
    /// The sequence is fully sorted.
    Completed,
    /// The cancellation signal was observed before the sort finished.
    Cancelled,
}

impl Outcome {
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
