//! A canonical container for an accepted journey mapping list.
//!
//! [`MappingSet`] wraps a `Vec<JourneyMapping>` that has passed
//! [`validate_and_sort`](crate::validate::validate_and_sort) and keeps the
//! invariant at all times: the list is non-empty, sorted by start, and no two
//! ranges overlap. The only constructor runs the validator, so holding a
//! `MappingSet` is proof the list was accepted.
//!
//! Read access is transparent via `Deref<Target = [JourneyMapping]>`, so code
//! that consumes `&[JourneyMapping]` works without changes.

use std::fmt::Display;
use std::ops::Deref;

use super::record::JourneyMapping;
use crate::validate::{validate_and_sort, Mode, ValidationError};

/// A non-empty, sorted, non-overlapping set of journey mappings.
///
/// # Examples
///
/// ```
/// use journey_partition::{JourneyMapping, MappingSet, Mode};
///
/// let set = MappingSet::validate(
///     &[
///         JourneyMapping::new("retention", 15, 30),
///         JourneyMapping::new("onboarding", 0, 14),
///     ],
///     Mode::NonOverlapping,
/// )
/// .unwrap();
///
/// // Which journey does a 20-day-old lead belong to?
/// assert_eq!(set.journey_at(20).unwrap().id(), "retention");
/// assert_eq!(set.journey_at(31), None);
///
/// // No uncovered days between the two ranges.
/// assert!(set.is_contiguous());
/// assert_eq!(set.span(), (0, 30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSet(Vec<JourneyMapping>);

impl MappingSet {
    /// Validates `mappings` under `mode` and wraps the accepted sorted list.
    ///
    /// This is the only way to build a `MappingSet`; all failure cases are
    /// those of [`validate_and_sort`](crate::validate::validate_and_sort).
    pub fn validate(mappings: &[JourneyMapping], mode: Mode) -> Result<Self, ValidationError> {
        validate_and_sort(mappings, mode).map(Self)
    }

    /// Finds the mapping whose range contains `age_days`, if any.
    ///
    /// Complexity: O(log n). Only the predecessor by start needs checking
    /// because the set is sorted and non-overlapping.
    pub fn journey_at(&self, age_days: u32) -> Option<&JourneyMapping> {
        let idx = self.0.partition_point(|m| m.start() <= age_days);
        let candidate = &self.0[idx.checked_sub(1)?];
        candidate.contains(age_days).then_some(candidate)
    }

    /// Returns the uncovered day ranges between consecutive mappings, each as
    /// an inclusive `(first_day, last_day)` pair.
    ///
    /// A set accepted under [`Mode::Contiguous`] has none; under
    /// [`Mode::NonOverlapping`] the caller can surface these to the user
    /// before submission.
    pub fn gaps(&self) -> Vec<(u32, u32)> {
        self.0
            .windows(2)
            .filter(|pair| !pair[0].abuts(&pair[1]))
            .map(|pair| (pair[0].end() + 1, pair[1].start() - 1))
            .collect()
    }

    /// Returns true if the mappings tile their span with no uncovered days.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].abuts(&pair[1]))
    }

    /// Inclusive `(earliest_start, latest_end)` covered by the set.
    pub fn span(&self) -> (u32, u32) {
        // The set is non-empty and sorted by construction.
        (self.0[0].start(), self.0[self.0.len() - 1].end())
    }

    /// Returns a slice of the mappings in start order.
    pub fn as_slice(&self) -> &[JourneyMapping] {
        &self.0
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<JourneyMapping> {
        self.0
    }
}

impl Deref for MappingSet {
    type Target = [JourneyMapping];

    fn deref(&self) -> &[JourneyMapping] {
        &self.0
    }
}

impl AsRef<[JourneyMapping]> for MappingSet {
    fn as_ref(&self) -> &[JourneyMapping] {
        &self.0
    }
}

impl IntoIterator for MappingSet {
    type Item = JourneyMapping;
    type IntoIter = std::vec::IntoIter<JourneyMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a JourneyMapping;
    type IntoIter = std::slice::Iter<'a, JourneyMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MappingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, mapping) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mapping)?;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// MappingSet Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for MappingSet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.0.serialize(serializer)
        }
    }

    /// Deserialization re-validates under [`Mode::NonOverlapping`], the
    /// invariant the container itself guarantees. Callers needing exact
    /// tiling re-check with [`MappingSet::is_contiguous`].
    impl<'de> Deserialize<'de> for MappingSet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let vec = Vec::<JourneyMapping>::deserialize(deserializer)?;
            MappingSet::validate(&vec, Mode::NonOverlapping).map_err(de::Error::custom)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    fn jm(id: &str, start: u32, end: u32) -> JourneyMapping {
        JourneyMapping::new(id, start, end)
    }

    #[test]
    fn serializes_as_journey_mappings_array() {
        let set = MappingSet::validate(
            &[jm("A", 0, 14).with_priority(1), jm("B", 15, 30)],
            Mode::Contiguous,
        )
        .unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "journeyId": "A",
                    "leadAgeMin": 0,
                    "leadAgeMax": 14,
                    "durationDays": 15,
                    "priority": 1,
                },
                {
                    "journeyId": "B",
                    "leadAgeMin": 15,
                    "leadAgeMax": 30,
                    "durationDays": 16,
                    "priority": 0,
                },
            ])
        );
    }

    #[test]
    fn deserializing_revalidates() {
        let json = r#"[
            {"journeyId":"B","leadAgeMin":20,"leadAgeMax":30},
            {"journeyId":"A","leadAgeMin":0,"leadAgeMax":14}
        ]"#;
        let set: MappingSet = serde_json::from_str(json).unwrap();
        assert_eq!(set[0].id(), "A");
        assert!(!set.is_contiguous());
    }

    #[test]
    fn deserializing_overlapping_payload_fails() {
        let json = r#"[
            {"journeyId":"A","leadAgeMin":0,"leadAgeMax":15},
            {"journeyId":"B","leadAgeMin":15,"leadAgeMax":30}
        ]"#;
        let err = serde_json::from_str::<MappingSet>(json).unwrap_err();
        assert!(err.to_string().contains("overlapping"));
    }
}
