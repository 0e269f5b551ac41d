//! journey_partition - lead-age journey mapping validation.
//!
//! Campaigns assign leads to journeys by lead age: each journey mapping
//! claims an inclusive day range `[start, end]`, and the full set must
//! partition the timeline without overlaps (and, where the call site
//! requires it, without gaps). This crate validates and normalizes such a
//! set before it is submitted to the backend, and answers which journey a
//! lead of a given age falls into.

pub mod mapping;
pub mod mix;
pub mod validate;

pub use mapping::{JourneyMapping, MappingSet};
pub use validate::{validate_and_sort, Mode, ValidationError};

/// Identifier type used for journeys and mapping records.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
