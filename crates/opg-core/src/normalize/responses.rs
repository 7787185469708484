use crate::document::Operation;

/// Reorder the status-code mapping into ascending lexicographic key order.
///
/// Purely for deterministic, diff-friendly output; response semantics are
/// untouched.
pub fn sort_responses(op: &mut Operation) {
    op.responses.sort_keys();
}
