//! AFL Fuzz harness for rank generation
//!
//! This harness tests the properties callers rely on:
//! 1. Ordering: a rank computed between two neighbors sorts strictly between them
//! 2. Consistency: the list of ranks stays strictly increasing after every edit
//! 3. Rejection: reversed bounds always fail instead of producing a rank
//!
//! Model: a list of ranks is edited by inserting at, moving, and removing
//! positions chosen by the input, the way a persistence layer would.

use afl::fuzz;
use midrank::ErrorKind;
use midrank::Rank;
use midrank::Ranker;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert a new element at a position
    Insert { pos_frac: u8 },
    /// Move an element from one position to another
    Move { from_frac: u8, to_frac: u8 },
    /// Remove an element
    Remove { pos_frac: u8 },
    /// Replace the list with freshly balanced ranks
    Rebalance,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 4;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Insert { pos_frac: rest[0] }, &rest[1..])),
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Move {
                    from_frac: rest[0],
                    to_frac: rest[1],
                };
                Some((op, &rest[2..]))
            }
            2 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            3 => Some((FuzzOp::Rebalance, rest)),
            _ => None,
        }
    }
}

fn scale(frac: u8, len: usize) -> usize {
    return (frac as usize * (len + 1) / 256).min(len);
}

/// Compute a rank for position `pos` and insert it there.
fn insert(ranker: &Ranker, ranks: &mut Vec<Rank>, pos: usize) {
    let before = pos.checked_sub(1).map(|i| ranks[i].as_str());
    let after = ranks.get(pos).map(|r| r.as_str());
    let rank = ranker.between(before, after).unwrap();

    if let Some(b) = before {
        assert!(b < rank.as_str(), "{rank:?} not after {b:?}");
    }
    if let Some(a) = after {
        assert!(rank.as_str() < a, "{rank:?} not before {a:?}");

        // CRITICAL INVARIANT: reversed bounds are rejected, never swapped
        if let Some(b) = before {
            let err = ranker.between(Some(a), Some(b)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRankOrder);
        }
    }

    ranks.insert(pos, rank);
}

fn main() {
    let ranker = Ranker::base62();

    fuzz!(|data: &[u8]| {
        let mut ranks: Vec<Rank> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { pos_frac } => {
                    let pos = scale(pos_frac, ranks.len());
                    insert(&ranker, &mut ranks, pos);
                }

                FuzzOp::Move { from_frac, to_frac } => {
                    if ranks.is_empty() {
                        continue;
                    }
                    let from = scale(from_frac, ranks.len() - 1);
                    ranks.remove(from);
                    let to = scale(to_frac, ranks.len());
                    insert(&ranker, &mut ranks, to);
                }

                FuzzOp::Remove { pos_frac } => {
                    if !ranks.is_empty() {
                        let pos = scale(pos_frac, ranks.len() - 1);
                        ranks.remove(pos);
                    }
                }

                FuzzOp::Rebalance => {
                    if !ranks.is_empty() {
                        ranks = ranker.balanced_ranks(ranks.len()).unwrap();
                    }
                }
            }

            assert!(
                ranks.windows(2).all(|w| w[0] < w[1]),
                "List out of order after {op:?}"
            );
        }
    });
}
