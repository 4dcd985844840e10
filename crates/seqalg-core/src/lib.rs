#![forbid(unsafe_code)]
//! seqalg-core: shared vocabulary for the sequence algorithms.
//!
//! - `Sequence`: read-only view over slices, arrays, vectors and absent (`None`) inputs.
//! - `Found`: "index or not found" carrier returned by every locating operation.
//! - `ScanConfig`: serializable settings for the traced scanner in `seqalg-ops`.
//!
//! Nothing in this crate allocates on the hot path or keeps state between calls.

pub mod config;
pub mod error;
pub mod position;
pub mod prelude;
pub mod sequence;

pub use config::ScanConfig;
pub use error::{Error, Result};
pub use position::{Found, NOT_FOUND};
pub use sequence::Sequence;
