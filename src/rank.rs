//! The rank value type.

use std::borrow::Borrow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A sortable string key.
///
/// Ranks order by plain string comparison, which for UTF-8 is code point
/// order. A rank is immutable once produced; store it with its element and
/// hand it back to the ranker as a bound when inserting next to that element.
///
/// Deserialized ranks are not checked against any alphabet; they are
/// validated when passed back to a ranker as bounds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(String);

impl Rank {
    pub(crate) fn new(s: String) -> Rank {
        return Rank(s);
    }

    /// The rank as a string slice.
    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// Consume the rank, returning the underlying string.
    pub fn into_string(self) -> String {
        return self.0;
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        return self.0.chars().count();
    }

    /// Whether the rank has no characters. Ranks produced by a ranker never
    /// are, but a deserialized one may be.
    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }
}

impl AsRef<str> for Rank {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for Rank {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> String {
        return rank.0;
    }
}

impl PartialEq<str> for Rank {
    fn eq(&self, other: &str) -> bool {
        return self.0 == other;
    }
}

impl PartialEq<&str> for Rank {
    fn eq(&self, other: &&str) -> bool {
        return self.0 == *other;
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Rank({:?})", self.0);
    }
}
