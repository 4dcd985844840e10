//! Convenient re-exports for downstream crates.

pub use crate::config::ScanConfig;
pub use crate::error::{Error, Result};
pub use crate::position::{Found, NOT_FOUND};
pub use crate::sequence::Sequence;
