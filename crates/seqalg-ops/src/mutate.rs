//! In-place conditional replace/remove.
//!
//! Both operations touch at most one element: the first one matching the
//! predicate. When nothing matches the sequence is left exactly as it was.

use seqalg_core::Found;

use crate::search::find_if;

/// Overwrite the first element satisfying `pred` with `replacement`.
///
/// Elements are never compared with each other, so no `PartialEq` bound.
pub fn replace_if<T, P>(seq: &mut [T], replacement: T, mut pred: P) -> Found
where
    P: FnMut(&T) -> bool,
{
    for (index, slot) in seq.iter_mut().enumerate() {
        if pred(&*slot) {
            *slot = replacement;
            return Found::at(index);
        }
    }
    Found::NONE
}

/// Remove the first element satisfying `pred`, shifting the tail left.
///
/// On a hit the vector is one shorter and equals `seq[..i] ++ seq[i + 1..]`
/// for the reported `i`, whatever position `i` is.
pub fn remove_if<T, P>(seq: &mut Vec<T>, pred: P) -> Found
where
    P: FnMut(&T) -> bool,
{
    let found = find_if(seq.as_slice(), pred);
    if let Some(index) = found.position() {
        seq.remove(index);
    }
    found
}
