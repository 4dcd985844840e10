//! Predicate scans: `any_of`, `find_if`, `adjacent_find`.
//!
//! All three stop at the first match; the predicate is never called on
//! elements past it.

use seqalg_core::{Found, Sequence};

/// `true` iff at least one element satisfies `pred`. Empty input is `false`.
pub fn any_of<S, P>(seq: &S, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    seq.as_items().iter().any(pred)
}

/// Index of the first element satisfying `pred`, scanning from 0.
pub fn find_if<S, P>(seq: &S, pred: P) -> Found
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    seq.as_items().iter().position(pred).into()
}

/// Smallest `i` with `pred(&seq[i], &seq[i + 1])`.
///
/// Sequences shorter than two elements have no pairs and report `Found::NONE`.
pub fn adjacent_find<S, P>(seq: &S, mut pred: P) -> Found
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    seq.as_items()
        .windows(2)
        .position(|pair| pred(&pair[0], &pair[1]))
        .into()
}
