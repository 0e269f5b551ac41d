//! A journey bound to an inclusive lead-age day range.

use std::fmt::Display;

use crate::Id;

/// A journey mapping claiming the inclusive lead-age range `[start, end]`,
/// in days.
///
/// Construction does not reject `start > end`; that violation is reported by
/// [`validate_and_sort`](crate::validate::validate_and_sort) as a typed error
/// carrying the offending id, so a form full of user input can be checked in
/// one pass instead of panicking on the first bad row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyMapping {
    id: Id,
    start: u32,
    end: u32,
    priority: i32,
}

impl JourneyMapping {
    /// Creates a mapping for `[start, end]` with priority 0.
    pub fn new(id: impl Into<Id>, start: u32, end: u32) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            priority: 0,
        }
    }

    /// Sets the scheduling priority forwarded to the backend. Validation
    /// never consults it.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Inclusive width of the range in days. Zero when the range is inverted.
    pub const fn duration_days(&self) -> u32 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Returns true if `age_days` ∈ `[start, end]`.
    pub const fn contains(&self, age_days: u32) -> bool {
        self.start <= age_days && age_days <= self.end
    }

    /// Checks if this range intersects another. Endpoints are inclusive, so
    /// `[0, 15]` and `[15, 30]` overlap: both claim day 15.
    pub const fn overlaps(&self, other: &JourneyMapping) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns true if `other` starts exactly one day after this range ends,
    /// i.e. the two ranges tile the timeline with no gap between them.
    pub fn abuts(&self, other: &JourneyMapping) -> bool {
        u64::from(self.end) + 1 == u64::from(other.start)
    }
}

impl Display for JourneyMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:[{}, {}]", self.id, self.start, self.end)
    }
}

// =============================================================================
// JourneyMapping Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire shape is the `journeyMappings` payload the backend expects:
    /// `journeyId`, `leadAgeMin`, `leadAgeMax`, `durationDays`, `priority`.
    /// `durationDays` is derived from the range on the way out and ignored on
    /// the way in.
    impl Serialize for JourneyMapping {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut s = serializer.serialize_struct("JourneyMapping", 5)?;
            s.serialize_field("journeyId", &self.id)?;
            s.serialize_field("leadAgeMin", &self.start)?;
            s.serialize_field("leadAgeMax", &self.end)?;
            s.serialize_field("durationDays", &self.duration_days())?;
            s.serialize_field("priority", &self.priority)?;
            s.end()
        }
    }

    impl<'de> Deserialize<'de> for JourneyMapping {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct MappingVisitor;

            impl<'de> Visitor<'de> for MappingVisitor {
                type Value = JourneyMapping;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str(
                        "a journey mapping object with 'journeyId' (or 'id'), \
                         'leadAgeMin' and 'leadAgeMax' fields",
                    )
                }

                fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut id: Option<String> = None;
                    let mut start: Option<u32> = None;
                    let mut end: Option<u32> = None;
                    let mut priority: Option<i32> = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "journeyId" | "id" => {
                                if id.is_some() {
                                    return Err(de::Error::duplicate_field("journeyId"));
                                }
                                id = Some(map.next_value()?);
                            }
                            "leadAgeMin" => {
                                if start.is_some() {
                                    return Err(de::Error::duplicate_field("leadAgeMin"));
                                }
                                start = Some(map.next_value()?);
                            }
                            "leadAgeMax" => {
                                if end.is_some() {
                                    return Err(de::Error::duplicate_field("leadAgeMax"));
                                }
                                end = Some(map.next_value()?);
                            }
                            "priority" => {
                                if priority.is_some() {
                                    return Err(de::Error::duplicate_field("priority"));
                                }
                                priority = Some(map.next_value()?);
                            }
                            _ => {
                                // Ignore unknown fields, durationDays included.
                                let _ = map.next_value::<de::IgnoredAny>()?;
                            }
                        }
                    }

                    let id = id.ok_or_else(|| de::Error::missing_field("journeyId"))?;
                    let start = start.ok_or_else(|| de::Error::missing_field("leadAgeMin"))?;
                    let end = end.ok_or_else(|| de::Error::missing_field("leadAgeMax"))?;

                    Ok(JourneyMapping::new(id, start, end)
                        .with_priority(priority.unwrap_or(0)))
                }
            }

            deserializer.deserialize_map(MappingVisitor)
        }
    }
}
