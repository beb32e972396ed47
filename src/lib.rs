//! Midrank - sortable string ranks for ordered collections.
//!
//! Each element of an ordered collection stores one rank string, and the
//! collection is sorted by plain string comparison. A new rank can always be
//! computed from the ranks of the two neighbors at the target position, so
//! inserting or moving an element never rewrites any other element's rank.
//!
//! # Quick Start
//!
//! ```
//! use midrank::Ranker;
//!
//! let ranker = Ranker::base62();
//!
//! // Seed a list that already has an order.
//! let ranks = ranker.balanced_ranks(3).unwrap();
//! assert_eq!(ranks, ["2", "M", "g"]);
//!
//! // Insert between the first two elements.
//! let mid = ranker.between(Some(ranks[0].as_str()), Some(ranks[1].as_str())).unwrap();
//! assert!(ranks[0] < mid && mid < ranks[1]);
//!
//! // Append after the last one.
//! let end = ranker.last(Some(ranks[2].as_str())).unwrap();
//! assert!(end > ranks[2]);
//! ```
//!
//! # Modules
//!
//! - [`space`]: the ordered alphabets ranks are written in
//! - [`encode`]: integers as fixed-radix strings over a space
//! - [`ranker`]: midpoints and balanced initial ranks
//! - [`config`]: building a ranker from settings

pub mod config;
pub mod encode;
pub mod error;
pub mod rank;
pub mod ranker;
pub mod space;

pub use config::RankerConfig;
pub use error::ErrorKind;
pub use error::RankError;
pub use error::Result;
pub use rank::Rank;
pub use ranker::Ranker;
pub use space::Alphabet;
pub use space::BASE62_ALPHABET;
pub use space::Base62;
pub use space::CharacterSpace;
