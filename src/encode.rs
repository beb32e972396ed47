//! Positional encoding of integers over a character space.
//!
//! Digits are written most significant first. Zero encodes to the empty
//! string, so fixed-width callers pad with [`pad`].

use crate::error::RankError;
use crate::error::Result;
use crate::space::CharacterSpace;

fn radix<S: CharacterSpace + ?Sized>(space: &S) -> Result<u128> {
    let size = space.size();
    if size == 0 {
        return Err(RankError::EmptyAlphabet);
    }
    if size < 2 {
        return Err(RankError::AlphabetTooSmall { size });
    }
    return Ok(size as u128);
}

/// Render `n` in base `space.size()` using the space's characters.
pub fn encode<S: CharacterSpace + ?Sized>(space: &S, n: u128) -> Result<String> {
    let radix = radix(space)?;
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(space.chr((rest % radix) as usize)?);
        rest /= radix;
    }
    return Ok(digits.iter().rev().collect());
}

/// Left-pad `s` with the space's minimum character to `width` characters.
///
/// Strings already at least `width` characters long are returned unchanged.
pub fn pad<S: CharacterSpace + ?Sized>(space: &S, s: &str, width: usize) -> Result<String> {
    let len = s.chars().count();
    if len >= width {
        return Ok(s.to_string());
    }
    let min = space.min()?;
    let mut out: String = std::iter::repeat_n(min, width - len).collect();
    out.push_str(s);
    return Ok(out);
}

/// Parse a string written with [`encode`] back into an integer.
///
/// Leading minimum characters are accepted and contribute nothing.
pub fn decode<S: CharacterSpace + ?Sized>(space: &S, s: &str) -> Result<u128> {
    let radix = radix(space)?;
    let mut n: u128 = 0;
    for ch in s.chars() {
        let digit = space.ord(ch)? as u128;
        n = n
            .checked_mul(radix)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| RankError::invalid_argument(format!("{s:?} does not fit in 128 bits")))?;
    }
    return Ok(n);
}
