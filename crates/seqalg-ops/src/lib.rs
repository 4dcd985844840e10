#![forbid(unsafe_code)]
//! seqalg-ops: STL-style building blocks over generic sequences.
//!
//! Design intent:
//! - Every operation is a pure, synchronous, single pass over its input.
//! - Bounds are explicit: nothing, `PartialEq`, or `Ord`, per operation.
//! - "No match" is a value (`Found::NONE`, `false`), never an error.
//! - The `Scanner` facade adds configurable tracing on top of the free
//!   functions without changing their results.

pub mod compare;
pub mod merge;
pub mod mutate;
pub mod scanner;
pub mod search;

mod trace;

pub use compare::{equal, is_sorted};
pub use merge::{merge, merge_owned};
pub use mutate::{remove_if, replace_if};
pub use scanner::Scanner;
pub use search::{adjacent_find, any_of, find_if};

pub use seqalg_core::{Found, Sequence, NOT_FOUND};
