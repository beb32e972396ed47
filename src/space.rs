//! Character spaces: the ordered digits that ranks are written in.
//!
//! A character space is a finite alphabet with a total order. Ranks are
//! compared as plain strings, so the order of the alphabet must agree with
//! code point order: `ord(a) < ord(b)` exactly when `a < b`. [`Alphabet`]
//! checks this when it is built.
//!
//! Two implementations are provided:
//!
//! - [`Base62`]: the default `0-9A-Za-z` space, computed arithmetically.
//! - [`Alphabet`]: any strictly ascending set of two or more characters.

use std::str::FromStr;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::RankError;
use crate::error::Result;

/// The default alphabet: digits, then uppercase, then lowercase letters.
pub const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered, finite alphabet used as the digits of a rank.
pub trait CharacterSpace {
    /// Zero-based index of `ch` in the alphabet.
    fn ord(&self, ch: char) -> Result<usize>;

    /// Character at `index`.
    fn chr(&self, index: usize) -> Result<char>;

    /// Number of characters in the alphabet.
    fn size(&self) -> usize;

    /// The lowest character.
    fn min(&self) -> Result<char> {
        if self.size() == 0 {
            return Err(RankError::EmptyAlphabet);
        }
        return self.chr(0);
    }

    /// The highest character.
    fn max(&self) -> Result<char> {
        if self.size() == 0 {
            return Err(RankError::EmptyAlphabet);
        }
        return self.chr(self.size() - 1);
    }

    /// Whether `ch` belongs to the alphabet.
    fn contains(&self, ch: char) -> bool {
        return self.ord(ch).is_ok();
    }
}

impl<S: CharacterSpace + ?Sized> CharacterSpace for &S {
    fn ord(&self, ch: char) -> Result<usize> {
        return (**self).ord(ch);
    }

    fn chr(&self, index: usize) -> Result<char> {
        return (**self).chr(index);
    }

    fn size(&self) -> usize {
        return (**self).size();
    }
}

/// The default `0-9A-Za-z` space.
///
/// Lookups are plain arithmetic on ASCII ranges, so this type carries no
/// table and is free to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Base62;

impl CharacterSpace for Base62 {
    fn ord(&self, ch: char) -> Result<usize> {
        let index = match ch {
            '0'..='9' => ch as usize - '0' as usize,
            'A'..='Z' => ch as usize - 'A' as usize + 10,
            'a'..='z' => ch as usize - 'a' as usize + 36,
            _ => return Err(RankError::CharacterNotFound { ch }),
        };
        return Ok(index);
    }

    fn chr(&self, index: usize) -> Result<char> {
        let byte = match index {
            0..=9 => b'0' + index as u8,
            10..=35 => b'A' + (index - 10) as u8,
            36..=61 => b'a' + (index - 36) as u8,
            _ => return Err(RankError::IndexOutOfRange { index, size: 62 }),
        };
        return Ok(byte as char);
    }

    fn size(&self) -> usize {
        return 62;
    }
}

/// A character space over an arbitrary alphabet.
///
/// The characters must be strictly ascending by code point; this rules out
/// duplicates and keeps string order equal to ordinal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: SmallVec<[char; 64]>,
    ords: FxHashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from its characters in ascending order.
    pub fn new(chars: &str) -> Result<Alphabet> {
        let chars: SmallVec<[char; 64]> = chars.chars().collect();
        if chars.is_empty() {
            return Err(RankError::EmptyAlphabet);
        }
        if chars.len() < 2 {
            return Err(RankError::AlphabetTooSmall { size: chars.len() });
        }

        for (index, pair) in chars.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(RankError::UnsortedAlphabet {
                    index: index + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        return Ok(Alphabet::from_sorted(chars));
    }

    /// The default `0-9A-Za-z` alphabet as a table.
    pub fn base62() -> Alphabet {
        return Alphabet::from_sorted(BASE62_ALPHABET.chars().collect());
    }

    fn from_sorted(chars: SmallVec<[char; 64]>) -> Alphabet {
        let ords = chars.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        return Alphabet { chars, ords };
    }

    /// The characters in ascending order.
    pub fn chars(&self) -> &[char] {
        return &self.chars;
    }
}

impl FromStr for Alphabet {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Alphabet> {
        return Alphabet::new(s);
    }
}

impl CharacterSpace for Alphabet {
    fn ord(&self, ch: char) -> Result<usize> {
        return self
            .ords
            .get(&ch)
            .copied()
            .ok_or(RankError::CharacterNotFound { ch });
    }

    fn chr(&self, index: usize) -> Result<char> {
        return self.chars.get(index).copied().ok_or(RankError::IndexOutOfRange {
            index,
            size: self.chars.len(),
        });
    }

    fn size(&self) -> usize {
        return self.chars.len();
    }
}
