#![forbid(unsafe_code)]
//! seqalg: generic sequence algorithms.
//!
//! Facade over the workspace crates:
//! - `seqalg-core`: `Sequence`, `Found`, `ScanConfig`, `Error`.
//! - `seqalg-ops`: the operations and the traced `Scanner`.
//!
//! ```
//! use seqalg::{any_of, find_if, merge, remove_if};
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! assert!(any_of(&[2, 4, 6], is_even));
//! assert_eq!(find_if(&[1, 3, 4], is_even).into_pair(), (2, true));
//!
//! let mut v = vec![2, 4, 6];
//! assert_eq!(remove_if(&mut v, is_even).index(), 0);
//! assert_eq!(v, [4, 6]);
//!
//! assert_eq!(merge(&[1, 3], &[2, 4, 5]), vec![1, 2, 3, 4, 5]);
//! ```

pub use seqalg_core::{config, error, position, prelude, sequence};
pub use seqalg_core::{Error, Found, Result, ScanConfig, Sequence, NOT_FOUND};

pub use seqalg_ops::{
    adjacent_find, any_of, compare, equal, find_if, is_sorted, merge, merge_owned, mutate,
    remove_if, replace_if, scanner, search, Scanner,
};
