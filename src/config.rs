//! Ranker configuration.
//!
//! A ranker is configured once, at construction, with the alphabet its ranks
//! are written in. Leaving the alphabet out selects [`BASE62_ALPHABET`].

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::ranker::Ranker;
use crate::space::Alphabet;
use crate::space::BASE62_ALPHABET;

/// Settings for building a [`Ranker`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Characters of the alphabet in ascending code point order.
    pub alphabet: Option<String>,
}

impl RankerConfig {
    /// Use a custom alphabet.
    pub fn with_alphabet(alphabet: impl Into<String>) -> RankerConfig {
        return RankerConfig {
            alphabet: Some(alphabet.into()),
        };
    }

    /// Validate the alphabet and build a ranker over it.
    pub fn build(&self) -> Result<Ranker<Alphabet>> {
        let chars = self.alphabet.as_deref().unwrap_or(BASE62_ALPHABET);
        let alphabet = Alphabet::new(chars)?;
        debug!(size = alphabet.chars().len(), "built ranker from config");
        return Ok(Ranker::new(alphabet));
    }
}
