//! Whole-sequence comparisons.

use seqalg_core::Sequence;

/// Same length and element-wise equal, in order.
///
/// `a` and `b` may be different container kinds, e.g. a `Vec` against an
/// array, as long as they hold the same element type.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    a.as_items() == b.as_items()
}

/// Non-strict ascending order: no element is greater than its successor.
pub fn is_sorted<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    seq.as_items().windows(2).all(|pair| pair[0] <= pair[1])
}
