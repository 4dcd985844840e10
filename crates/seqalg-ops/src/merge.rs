//! Interleave-merge.
//!
//! NOTE: this is *not* a sorted merge. Elements alternate `a[0], b[0],
//! a[1], b[1], ...` for the length of the shorter input, then the rest of
//! the longer input follows. Input order is kept; sortedness is neither
//! required nor produced.

use seqalg_core::Sequence;

/// Interleave clones of `a` and `b`. An empty side yields a copy of the other.
pub fn merge<A, B>(a: &A, b: &B) -> Vec<A::Item>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Clone,
{
    let (a, b) = (a.as_items(), b.as_items());
    let shared = a.len().min(b.len());

    let mut out = Vec::with_capacity(a.len() + b.len());
    for (x, y) in a.iter().zip(b) {
        out.push(x.clone());
        out.push(y.clone());
    }
    out.extend_from_slice(&a[shared..]);
    out.extend_from_slice(&b[shared..]);
    out
}

/// Owning variant of [`merge`]; needs no `Clone`.
///
/// If either input is empty the other one is returned as-is, without
/// reallocating.
pub fn merge_owned<T>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                out.push(x);
                out.push(y);
            }
            (Some(x), None) => {
                out.push(x);
                out.extend(a);
                break;
            }
            (None, Some(y)) => {
                out.push(y);
                out.extend(b);
                break;
            }
            (None, None) => break,
        }
    }
    out
}
