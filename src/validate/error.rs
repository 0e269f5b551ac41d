use thiserror::Error;

use crate::Id;

/// Violations detected while validating a journey mapping list.
///
/// All variants are recoverable by the caller: they carry the offending
/// id(s) so the surrounding form can highlight the exact rows to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one journey mapping is required")]
    EmptyInput,

    #[error("journey {id}: lead-age range start exceeds end")]
    InvalidRange { id: Id },

    #[error("journeys {first} and {second} cover overlapping day ranges")]
    OverlappingRanges { first: Id, second: Id },

    #[error("journeys {first} and {second} must tile the timeline exactly (no gap, no overlap)")]
    GapOrOverlap { first: Id, second: Id },
}
