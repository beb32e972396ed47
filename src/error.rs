//! Error types for rank generation.

/// Broad category of a [`RankError`].
///
/// Every variant is a local precondition violation: none of them can be
/// fixed by retrying the same call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The alphabet handed to a character space is unusable.
    Configuration,
    /// A character or ordinal outside the alphabet was looked up.
    Lookup,
    /// The bounds given to `between` were not in ascending order.
    InvalidRankOrder,
    /// A count or list argument was out of range.
    InvalidArgument,
    /// An internal invariant was broken.
    Internal,
}

/// Errors that can occur while building character spaces or computing ranks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The alphabet has no characters at all.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The alphabet has fewer than two characters.
    #[error("alphabet needs at least 2 characters, got {size}")]
    AlphabetTooSmall {
        /// Number of characters supplied.
        size: usize,
    },

    /// The alphabet is not strictly ascending by code point.
    #[error("alphabet is not strictly ascending at index {index}: {prev:?} then {next:?}")]
    UnsortedAlphabet {
        /// Index of the offending character.
        index: usize,
        /// The character before it.
        prev: char,
        /// The offending character.
        next: char,
    },

    /// A character is not part of the alphabet.
    #[error("character {ch:?} is not in the alphabet")]
    CharacterNotFound {
        /// The character that was looked up.
        ch: char,
    },

    /// An ordinal is outside `[0, size)`.
    #[error("index {index} is out of range for an alphabet of {size} characters")]
    IndexOutOfRange {
        /// The ordinal that was looked up.
        index: usize,
        /// Size of the alphabet.
        size: usize,
    },

    /// The computed rank does not sort strictly between the bounds.
    ///
    /// This only happens when the bounds were passed out of order.
    #[error("computed rank {rank:?} does not sort between {before:?} and {after:?}")]
    InvalidRankOrder {
        /// The lower bound.
        before: String,
        /// The rank that was computed.
        rank: String,
        /// The upper bound it was meant to sort before.
        after: String,
    },

    /// An argument was out of the accepted range.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with it.
        reason: String,
    },

    /// The midpoint walk reached its safety cap without finding a midpoint.
    #[error("midpoint search between {before:?} and {after:?} did not terminate")]
    Unterminated {
        /// Lower bound of the search.
        before: String,
        /// Upper bound of the search.
        after: String,
    },
}

impl RankError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        return match self {
            RankError::EmptyAlphabet
            | RankError::AlphabetTooSmall { .. }
            | RankError::UnsortedAlphabet { .. } => ErrorKind::Configuration,
            RankError::CharacterNotFound { .. } | RankError::IndexOutOfRange { .. } => {
                ErrorKind::Lookup
            }
            RankError::InvalidRankOrder { .. } => ErrorKind::InvalidRankOrder,
            RankError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            RankError::Unterminated { .. } => ErrorKind::Internal,
        };
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> RankError {
        return RankError::InvalidArgument {
            reason: reason.into(),
        };
    }
}

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, RankError>;
