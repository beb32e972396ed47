//! Rank generation.
//!
//! A [`Ranker`] computes new ranks from the ranks of an element's neighbors.
//! It never touches storage: callers pass in the rank immediately before and
//! immediately after the target position (or `None` at either end) and
//! persist whatever comes back.
//!
//! # Midpoints
//!
//! [`Ranker::between`] walks both bounds one character at a time. Where the
//! bounds agree, the shared character is copied. Where they differ by more
//! than one ordinal, the mean ordinal (rounded half up) is written and the
//! walk stops. Where they differ by exactly one ordinal, there is no room at
//! this position, so the lower character is copied and the walk continues;
//! from then on the result already sorts below `after`, so the upper bound
//! is treated as open.
//!
//! This produces the shortest string that fits, which keeps ranks compact
//! under repeated insertion at the same point.
//!
//! # Balanced ranks
//!
//! [`Ranker::balanced_ranks`] spreads `count` fixed-width ranks evenly over
//! the space, leaving two ordinals of headroom at the bottom so later
//! inserts before the first element still fit.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use smallvec::smallvec;
use tracing::debug;
use tracing::error;
use tracing::trace;
use tracing::warn;

use crate::encode::encode;
use crate::encode::pad;
use crate::error::RankError;
use crate::error::Result;
use crate::rank::Rank;
use crate::space::Alphabet;
use crate::space::Base62;
use crate::space::CharacterSpace;

/// Ordinal reserved below the first balanced rank.
const BALANCED_START: u128 = 2;

type Chars = SmallVec<[char; 16]>;

/// Computes ranks over a character space.
///
/// A ranker holds nothing but its immutable space, so it can be shared
/// freely between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranker<S = Base62> {
    space: S,
}

impl Ranker<Base62> {
    /// A ranker over the default `0-9A-Za-z` space.
    pub fn base62() -> Ranker<Base62> {
        return Ranker::new(Base62);
    }
}

impl Ranker<Alphabet> {
    /// Build a ranker over a custom alphabet, given in ascending order.
    pub fn with_alphabet(chars: &str) -> Result<Ranker<Alphabet>> {
        return Ok(Ranker::new(Alphabet::new(chars)?));
    }
}

impl<S: CharacterSpace> Ranker<S> {
    /// Create a ranker over `space`.
    pub fn new(space: S) -> Ranker<S> {
        return Ranker { space };
    }

    /// The character space ranks are written in.
    pub fn space(&self) -> &S {
        return &self.space;
    }

    /// Check that every character of `rank` belongs to the space.
    pub fn validate(&self, rank: &str) -> Result<()> {
        for ch in rank.chars() {
            self.space.ord(ch)?;
        }
        return Ok(());
    }

    /// A rank for the only element of a collection.
    pub fn only(&self) -> Result<Rank> {
        return self.between(None, None);
    }

    /// A rank that sorts before `after`.
    pub fn first(&self, after: Option<&str>) -> Result<Rank> {
        return self.between(None, after);
    }

    /// A rank that sorts after `before`.
    pub fn last(&self, before: Option<&str>) -> Result<Rank> {
        return self.between(before, None);
    }

    /// A rank that sorts strictly between `before` and `after`.
    ///
    /// `None` on either side means there is no element there. An empty
    /// `before` is treated the same as `None`.
    ///
    /// Fails with [`RankError::InvalidRankOrder`] when the bounds are out of
    /// order (or equal, or have nothing between them), and with
    /// [`RankError::CharacterNotFound`] when a bound contains a character
    /// outside the space.
    pub fn between(&self, before: Option<&str>, after: Option<&str>) -> Result<Rank> {
        let min = self.space.min()?;
        let max = self.space.max()?;

        let before = before.filter(|b| !b.is_empty());
        if let Some(b) = before {
            self.validate(b)?;
        }
        if let Some(a) = after {
            self.validate(a)?;
        }

        let low: Chars = match before {
            Some(b) => b.chars().collect(),
            None => smallvec![min],
        };
        let high: Chars = match after {
            Some(a) => a.chars().collect(),
            None => smallvec![max],
        };

        if after == Some("") {
            return Err(self.misordered(&low, String::new(), ""));
        }

        // Cleared once the result is known to sort below `after`.
        let mut bounded = after.is_some();
        let mut out = String::with_capacity(low.len() + 1);
        let mut done = false;

        for i in 0..low.len() + high.len() {
            let prev = low.get(i).copied().unwrap_or(min);
            let next = if bounded {
                high.get(i).copied().unwrap_or(max)
            } else {
                max
            };

            if prev == next {
                out.push(prev);
                continue;
            }

            let mid = self.space.chr(midpoint(self.space.ord(prev)?, self.space.ord(next)?))?;
            if mid != prev && mid != next {
                out.push(mid);
                done = true;
                break;
            }

            // Past the end of `before` with the top open: any character
            // above the minimum fits. Only two-character spaces get here.
            if !bounded && i >= low.len() {
                out.push(next);
                done = true;
                break;
            }

            out.push(prev);
            if prev < next {
                bounded = false;
            }
        }

        if !done {
            if after.is_some() && padded_cmp(&low, &high, min) != Ordering::Less {
                return Err(self.misordered(&low, out, after.unwrap_or_default()));
            }
            let before: String = low.iter().collect();
            let after: String = high.iter().collect();
            error!(%before, %after, "midpoint search hit its iteration cap");
            return Err(RankError::Unterminated { before, after });
        }

        let low_str: String = low.iter().collect();
        let below_after = match after {
            Some(a) => out.as_str() < a,
            None => true,
        };
        if out <= low_str || !below_after {
            return Err(self.misordered(&low, out, after.unwrap_or_default()));
        }

        trace!(before = %low_str, after = ?after, rank = %out, "computed midpoint");
        return Ok(Rank::new(out));
    }

    fn misordered(&self, low: &[char], rank: String, after: &str) -> RankError {
        let before: String = low.iter().collect();
        warn!(%before, %after, %rank, "bounds are not in ascending order");
        return RankError::InvalidRankOrder {
            before,
            rank,
            after: after.to_string(),
        };
    }

    /// `count` strictly increasing ranks that all sort between `before` and
    /// `after`.
    ///
    /// Ranks are produced by bisection, so a batch inserted into one gap is
    /// spread evenly across it instead of crowding one end.
    pub fn ranks_between(
        &self,
        before: Option<&str>,
        after: Option<&str>,
        count: usize,
    ) -> Result<Vec<Rank>> {
        if count == 0 {
            return Err(RankError::invalid_argument("count must be positive"));
        }
        let mut out = Vec::with_capacity(count);
        self.bisect(before, after, count, &mut out)?;
        return Ok(out);
    }

    fn bisect(
        &self,
        before: Option<&str>,
        after: Option<&str>,
        count: usize,
        out: &mut Vec<Rank>,
    ) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let mid = self.between(before, after)?;
        let left = (count - 1) / 2;
        self.bisect(before, Some(mid.as_str()), left, out)?;
        out.push(mid.clone());
        self.bisect(Some(mid.as_str()), after, count - 1 - left, out)?;
        return Ok(());
    }

    /// `count` fixed-width, strictly increasing ranks spread evenly across
    /// the space.
    ///
    /// Fails with [`RankError::InvalidArgument`] when `count` is zero.
    pub fn balanced_ranks(&self, count: usize) -> Result<Vec<Rank>> {
        if count == 0 {
            return Err(RankError::invalid_argument("count must be positive"));
        }
        let too_large = || RankError::invalid_argument(format!("count {count} is too large"));

        let size = self.space.size() as u128;
        if size == 0 {
            return Err(RankError::EmptyAlphabet);
        }
        if size < 2 {
            return Err(RankError::AlphabetTooSmall { size: size as usize });
        }
        let count = count as u128;

        // Smallest width whose span leaves room for `count` values plus the
        // reserved margin. Fewer places would make neighbors collide.
        let mut places: u32 = 0;
        let mut span: u128 = 1;
        while span < count + BALANCED_START {
            places += 1;
            span = span.checked_mul(size).ok_or_else(too_large)?;
        }
        let ending = span - BALANCED_START;

        let mut ranks = Vec::new();
        ranks.try_reserve_exact(count as usize).map_err(|_| too_large())?;
        for i in 0..count {
            let scaled = i
                .checked_mul(ending)
                .and_then(|n| n.checked_mul(2))
                .and_then(|n| n.checked_add(count))
                .ok_or_else(too_large)?;
            let ordinal = BALANCED_START + scaled / (2 * count);
            let digits = encode(&self.space, ordinal)?;
            ranks.push(Rank::new(pad(&self.space, &digits, places as usize)?));
        }

        debug!(count = count as u64, places, "generated balanced ranks");
        return Ok(ranks);
    }

    /// Pair each element, already in its final order, with a balanced rank.
    ///
    /// Elements are not deduplicated: equal elements each get their own rank.
    /// An empty input gives an empty result.
    pub fn init_from_ordered_list<T, I>(&self, elements: I) -> Result<Vec<(T, Rank)>>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        if elements.is_empty() {
            return Ok(Vec::new());
        }
        let ranks = self.balanced_ranks(elements.len())?;
        return Ok(elements.into_iter().zip(ranks).collect());
    }

    /// Like [`Ranker::init_from_ordered_list`], collected into a map.
    ///
    /// If an element appears more than once, its last rank wins.
    pub fn init_map<T, I>(&self, elements: I) -> Result<FxHashMap<T, Rank>>
    where
        T: Eq + Hash,
        I: IntoIterator<Item = T>,
    {
        return Ok(self.init_from_ordered_list(elements)?.into_iter().collect());
    }
}

/// Mean of two ordinals, rounded half up.
fn midpoint(a: usize, b: usize) -> usize {
    return (a + b + 1) / 2;
}

/// Compare two rank strings as if the shorter were padded with `min`.
fn padded_cmp(a: &[char], b: &[char], min: char) -> Ordering {
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(min);
        let y = b.get(i).copied().unwrap_or(min);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    return Ordering::Equal;
}
