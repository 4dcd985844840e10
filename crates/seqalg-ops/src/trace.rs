//! Tracing hooks for the scanner.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

use seqalg_core::Found;

#[cfg(feature = "tracing")]
pub(crate) fn emit_found(label: &str, op: &'static str, found: Found, len: usize) {
    tracing::trace!(
        label,
        op,
        index = found.index(),
        found = found.is_found(),
        len,
        "sequence scan"
    );
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_flag(label: &str, op: &'static str, outcome: bool, len: usize) {
    tracing::trace!(label, op, outcome, len, "sequence check");
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_merge(label: &str, op: &'static str, left: usize, right: usize) {
    tracing::trace!(label, op, left, right, len = left + right, "sequence merge");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_found(_label: &str, _op: &'static str, _found: Found, _len: usize) { /* no-op */
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_flag(_label: &str, _op: &'static str, _outcome: bool, _len: usize) { /* no-op */
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_merge(_label: &str, _op: &'static str, _left: usize, _right: usize) { /* no-op */
}
