//! Validation of journey mapping lists against the day-range partition rule.
//!
//! A campaign's journey mappings carve the lead-age timeline into inclusive
//! day ranges. Before the list is submitted, it must be checked for overlaps
//! (every call site) and, where the product requires exact tiling, for gaps
//! as well. [`validate_and_sort`] is the single implementation of that rule;
//! call sites declare which invariant they want through [`Mode`] instead of
//! re-deriving slightly different checks inline.

mod error;

pub use error::ValidationError;


use crate::mapping::JourneyMapping;

/// Which partition invariant the caller requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Adjacent ranges may not overlap; gaps between ranges are permitted.
    #[default]
    NonOverlapping,
    /// Adjacent ranges must neither overlap nor leave a gap: consecutive
    /// ranges must satisfy `previous.end + 1 == next.start` exactly.
    Contiguous,
}

/// Validates a journey mapping list and returns a sorted copy.
///
/// The input is never mutated. On success the returned list is ordered by
/// `start` ascending (ties broken by `end` ascending, then input order), and
/// every adjacent pair satisfies the invariant `mode` selects. On failure the
/// error names the offending record(s):
///
/// - [`ValidationError::EmptyInput`] — the list has zero elements.
/// - [`ValidationError::InvalidRange`] — a record has `start > end`; the
///   first such record in input order is reported, before any pair check.
/// - [`ValidationError::OverlappingRanges`] — two ranges intersect
///   ([`Mode::NonOverlapping`]). Boundary equality counts as overlap: both
///   ranges include that day.
/// - [`ValidationError::GapOrOverlap`] — two adjacent ranges neither abut
///   exactly nor stay apart correctly ([`Mode::Contiguous`]). The single
///   check covers both a gap and an overlap; callers wanting to distinguish
///   them can compare the two records' bounds themselves.
///
/// Complexity: O(n log n). Pure function; safe to call from any thread on
/// independent inputs.
///
/// # Examples
///
/// ```
/// use journey_partition::{validate_and_sort, JourneyMapping, Mode};
///
/// let drafts = vec![
///     JourneyMapping::new("retention", 15, 30),
///     JourneyMapping::new("onboarding", 0, 14),
/// ];
///
/// let accepted = validate_and_sort(&drafts, Mode::Contiguous).unwrap();
/// assert_eq!(accepted[0].id(), "onboarding");
/// assert_eq!(accepted[1].id(), "retention");
/// ```
pub fn validate_and_sort(
    mappings: &[JourneyMapping],
    mode: Mode,
) -> Result<Vec<JourneyMapping>, ValidationError> {
    if mappings.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    // Per-record check first, in input order, so a list containing both an
    // inverted range and an overlap always reports the inverted range.
    for mapping in mappings {
        if mapping.start() > mapping.end() {
            return Err(ValidationError::InvalidRange {
                id: mapping.id().clone(),
            });
        }
    }

    let mut sorted = mappings.to_vec();
    // Stable sort: records sharing both bounds keep their input order.
    sorted.sort_by(|a, b| a.start().cmp(&b.start()).then(a.end().cmp(&b.end())));

    for pair in sorted.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let violated = match mode {
            Mode::NonOverlapping => prev.end() >= next.start(),
            Mode::Contiguous => !prev.abuts(next),
        };
        if violated {
            let first = prev.id().clone();
            let second = next.id().clone();
            return Err(match mode {
                Mode::NonOverlapping => ValidationError::OverlappingRanges { first, second },
                Mode::Contiguous => ValidationError::GapOrOverlap { first, second },
            });
        }
    }

    Ok(sorted)
}
