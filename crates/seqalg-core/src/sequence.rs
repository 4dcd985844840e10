//! Read-only sequence views.
//!
//! The algorithms accept anything that can lend out a contiguous slice.
//! `Option<S>` is a sequence too: `None` views as empty, so an absent input
//! behaves exactly like `[]`.

/// An ordered, finite, index-addressable run of `Item`s.
pub trait Sequence {
    type Item;

    fn as_items(&self) -> &[Self::Item];
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn as_items(&self) -> &[S::Item] {
        (**self).as_items()
    }
}

impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn as_items(&self) -> &[S::Item] {
        match self {
            Some(seq) => seq.as_items(),
            None => &[],
        }
    }
}
