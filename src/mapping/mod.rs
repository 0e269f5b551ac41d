//! Journey mapping records and the canonical validated set.

mod record;
mod set;

pub use record::JourneyMapping;
pub use set::MappingSet;
