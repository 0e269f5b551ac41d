//! Lead data mix percentages for a campaign.
//!
//! A campaign pulls leads from three sources in configured proportions. The
//! three percentages must always total exactly 100; editing one field
//! rebalances the other two rather than rejecting the edit.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MixError {
    #[error("mix percentages must total 100, got {total}")]
    BadTotal { total: u32 },

    #[error("mix percentage {value} is out of range 0..=100")]
    OutOfRange { value: u8 },
}

/// Which percentage field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixField {
    Fresh,
    Aged,
    Recycled,
}

/// Percentages of fresh, aged, and recycled leads, always totalling 100.
///
/// # Examples
///
/// ```
/// use journey_partition::mix::{DataMix, MixField};
///
/// let mix = DataMix::new(60, 30, 10).unwrap();
/// // Pin fresh to 40%; the other two absorb the difference proportionally.
/// let mix = mix.set(MixField::Fresh, 40).unwrap();
/// assert_eq!(mix.fresh(), 40);
/// assert_eq!(mix.aged() + mix.recycled(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataMix {
    fresh: u8,
    aged: u8,
    recycled: u8,
}

impl DataMix {
    /// Creates a mix, rejecting totals other than 100.
    pub fn new(fresh: u8, aged: u8, recycled: u8) -> Result<Self, MixError> {
        let total = u32::from(fresh) + u32::from(aged) + u32::from(recycled);
        if total != 100 {
            return Err(MixError::BadTotal { total });
        }
        Ok(Self {
            fresh,
            aged,
            recycled,
        })
    }

    pub const fn fresh(&self) -> u8 {
        self.fresh
    }

    pub const fn aged(&self) -> u8 {
        self.aged
    }

    pub const fn recycled(&self) -> u8 {
        self.recycled
    }

    /// Returns a new mix with `field` pinned to `value` and the remainder
    /// split across the other two fields in proportion to their previous
    /// values. When both were zero the remainder splits evenly, with an odd
    /// leftover going to the first of the two in `fresh`, `aged`, `recycled`
    /// order. Deterministic: the result always totals exactly 100.
    pub fn set(self, field: MixField, value: u8) -> Result<Self, MixError> {
        if value > 100 {
            return Err(MixError::OutOfRange { value });
        }
        let remainder = 100 - u32::from(value);
        let (a, b) = match field {
            MixField::Fresh => (self.aged, self.recycled),
            MixField::Aged => (self.fresh, self.recycled),
            MixField::Recycled => (self.fresh, self.aged),
        };
        let old_sum = u32::from(a) + u32::from(b);
        let new_a = if old_sum == 0 {
            remainder.div_ceil(2)
        } else {
            remainder * u32::from(a) / old_sum
        };
        let new_b = remainder - new_a;

        let (new_a, new_b) = (new_a as u8, new_b as u8);
        Ok(match field {
            MixField::Fresh => Self {
                fresh: value,
                aged: new_a,
                recycled: new_b,
            },
            MixField::Aged => Self {
                fresh: new_a,
                aged: value,
                recycled: new_b,
            },
            MixField::Recycled => Self {
                fresh: new_a,
                aged: new_b,
                recycled: value,
            },
        })
    }
}

// =============================================================================
// DataMix Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DataMix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("DataMix", 3)?;
        s.serialize_field("fresh", &self.fresh)?;
        s.serialize_field("aged", &self.aged)?;
        s.serialize_field("recycled", &self.recycled)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DataMix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            fresh: u8,
            aged: u8,
            recycled: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.fresh, raw.aged, raw.recycled).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_exact_total() {
        let mix = DataMix::new(60, 30, 10).unwrap();
        assert_eq!(mix.fresh(), 60);
        assert_eq!(mix.aged(), 30);
        assert_eq!(mix.recycled(), 10);
    }

    #[test]
    fn new_rejects_bad_total() {
        assert_eq!(DataMix::new(60, 30, 20), Err(MixError::BadTotal { total: 110 }));
        assert_eq!(DataMix::new(10, 10, 10), Err(MixError::BadTotal { total: 30 }));
    }

    #[test]
    fn set_rebalances_proportionally() {
        let mix = DataMix::new(60, 30, 10).unwrap();
        let mix = mix.set(MixField::Fresh, 40).unwrap();
        // 60 remaining, split 30:10 -> 45:15.
        assert_eq!(mix.fresh(), 40);
        assert_eq!(mix.aged(), 45);
        assert_eq!(mix.recycled(), 15);
    }

    #[test]
    fn set_always_totals_100() {
        let mut mix = DataMix::new(34, 33, 33).unwrap();
        for value in [0, 1, 17, 50, 99, 100] {
            mix = mix.set(MixField::Aged, value).unwrap();
            let total = u32::from(mix.fresh()) + u32::from(mix.aged()) + u32::from(mix.recycled());
            assert_eq!(total, 100);
            assert_eq!(mix.aged(), value);
        }
    }

    #[test]
    fn set_splits_evenly_when_others_were_zero() {
        let mix = DataMix::new(100, 0, 0).unwrap();
        let mix = mix.set(MixField::Fresh, 25).unwrap();
        assert_eq!(mix.aged(), 38);
        assert_eq!(mix.recycled(), 37);
    }

    #[test]
    fn set_to_100_zeroes_the_others() {
        let mix = DataMix::new(60, 30, 10).unwrap();
        let mix = mix.set(MixField::Recycled, 100).unwrap();
        assert_eq!(mix.fresh(), 0);
        assert_eq!(mix.aged(), 0);
        assert_eq!(mix.recycled(), 100);
    }

    #[test]
    fn set_rejects_out_of_range_value() {
        let mix = DataMix::new(60, 30, 10).unwrap();
        assert_eq!(
            mix.set(MixField::Fresh, 101),
            Err(MixError::OutOfRange { value: 101 })
        );
    }

    #[test]
    fn set_is_deterministic() {
        let mix = DataMix::new(50, 25, 25).unwrap();
        assert_eq!(
            mix.set(MixField::Fresh, 30).unwrap(),
            mix.set(MixField::Fresh, 30).unwrap()
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let mix = DataMix::new(60, 30, 10).unwrap();
        let json = serde_json::to_string(&mix).unwrap();
        let back: DataMix = serde_json::from_str(&json).unwrap();
        assert_eq!(mix, back);
    }

    #[test]
    fn deserializing_bad_total_fails() {
        let err =
            serde_json::from_str::<DataMix>(r#"{"fresh":50,"aged":50,"recycled":50}"#).unwrap_err();
        assert!(err.to_string().contains("total 100"));
    }
}
