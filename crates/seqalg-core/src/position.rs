//! Result of a locating scan.
//!
//! Every operation that searches for an element answers with a `Found`.
//! It converts to either shape callers tend to want:
//! - `position()` for `Option<usize>`-style matching;
//! - `index()` / `into_pair()` for the `(-1, false)` sentinel convention.

use serde::{Deserialize, Serialize};

/// Sentinel index reported when nothing matched.
pub const NOT_FOUND: isize = -1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Found(Option<usize>);

impl Found {
    /// No element matched.
    pub const NONE: Found = Found(None);

    pub fn at(index: usize) -> Self {
        Found(Some(index))
    }

    pub fn is_found(self) -> bool {
        self.0.is_some()
    }

    pub fn position(self) -> Option<usize> {
        self.0
    }

    /// Matched index, or `NOT_FOUND`.
    ///
    /// Indices past `isize::MAX` (only reachable with zero-sized elements)
    /// saturate to `isize::MAX`.
    pub fn index(self) -> isize {
        match self.0 {
            Some(i) => isize::try_from(i).unwrap_or(isize::MAX),
            None => NOT_FOUND,
        }
    }

    /// `(index, found)`, e.g. `(0, true)` or `(-1, false)`.
    pub fn into_pair(self) -> (isize, bool) {
        (self.index(), self.is_found())
    }
}

impl From<Option<usize>> for Found {
    fn from(position: Option<usize>) -> Self {
        Found(position)
    }
}

impl From<Found> for Option<usize> {
    fn from(found: Found) -> Self {
        found.0
    }
}

impl From<Found> for (isize, bool) {
    fn from(found: Found) -> Self {
        found.into_pair()
    }
}
