use thiserror::Error;

/// Contract violations surfaced to the caller.
///
/// Per-item problems during bulk operations are not errors; they are recorded
/// in a [`BulkReport`](super::BulkReport) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("cannot pick a random element from an empty sequence")]
    EmptySequence,
}
