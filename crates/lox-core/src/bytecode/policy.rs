//! Growth policy: `new = max(min_capacity, old * factor)`.

use crate::{CoreError, CoreResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable constants of the buffer growth algorithm.
///
/// A valid policy (`min_capacity >= 1`, `factor >= 2`) always yields a
/// strictly larger capacity, so an append on a full buffer cannot spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GrowthPolicy {
    /// Capacity of the first allocation.
    pub min_capacity: usize,
    /// Multiplier applied to the old capacity on every later growth.
    pub factor: usize,
}

impl GrowthPolicy {
    /// Default starting capacity.
    pub const DEFAULT_MIN_CAPACITY: usize = 8;
    /// Default multiplier (doubling).
    pub const DEFAULT_FACTOR: usize = 2;

    /// `{ min_capacity: 8, factor: 2 }`.
    pub const DEFAULT: Self = Self {
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
        factor: Self::DEFAULT_FACTOR,
    };

    /// Build a validated policy.
    pub fn new(min_capacity: usize, factor: usize) -> CoreResult<Self> {
        let policy = Self { min_capacity, factor };
        policy.validate()?;
        Ok(policy)
    }

    /// Check the strict-growth guarantee.
    pub const fn validate(&self) -> CoreResult<()> {
        if self.min_capacity == 0 {
            return Err(CoreError::InvalidPolicy("min_capacity must be at least 1"));
        }
        if self.factor < 2 {
            return Err(CoreError::InvalidPolicy("factor must be at least 2"));
        }
        Ok(())
    }

    /// Largest capacity a buffer may reserve (`Vec` is limited to `isize::MAX` bytes).
    pub const MAX_CAPACITY: usize = isize::MAX as usize;

    /// Capacity to allocate when a buffer of capacity `old` is full.
    ///
    /// Fails with `CapacityOverflow` when the result would exceed
    /// [`Self::MAX_CAPACITY`], whether through `old * factor` or `min_capacity`.
    pub fn next_capacity(&self, old: usize) -> CoreResult<usize> {
        match old.checked_mul(self.factor).map(|scaled| scaled.max(self.min_capacity)) {
            Some(new) if new <= Self::MAX_CAPACITY => Ok(new),
            _ => Err(CoreError::CapacityOverflow { capacity: old }),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_sequence_doubles_from_eight() {
        let p = GrowthPolicy::default();
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            cap = p.next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![8, 16, 32, 64, 128]);
    }

    #[test]
    fn rejects_non_growing_policies() {
        assert_eq!(
            GrowthPolicy::new(8, 1),
            Err(CoreError::InvalidPolicy("factor must be at least 2"))
        );
        assert_eq!(
            GrowthPolicy::new(8, 0),
            Err(CoreError::InvalidPolicy("factor must be at least 2"))
        );
        assert_eq!(
            GrowthPolicy::new(0, 2),
            Err(CoreError::InvalidPolicy("min_capacity must be at least 1"))
        );
        assert!(GrowthPolicy::new(1, 3).is_ok());
    }

    #[test]
    fn min_capacity_wins_while_small() {
        let p = GrowthPolicy::new(100, 2).unwrap();
        assert_eq!(p.next_capacity(0).unwrap(), 100);
        assert_eq!(p.next_capacity(10).unwrap(), 100);
        assert_eq!(p.next_capacity(100).unwrap(), 200);
    }

    #[test]
    fn overflow_is_reported() {
        let p = GrowthPolicy::default();
        assert_eq!(
            p.next_capacity(usize::MAX / 2 + 1),
            Err(CoreError::CapacityOverflow { capacity: usize::MAX / 2 + 1 })
        );
        // Fits in a usize but not in a Vec.
        assert_eq!(
            p.next_capacity(GrowthPolicy::MAX_CAPACITY / 2 + 1),
            Err(CoreError::CapacityOverflow { capacity: GrowthPolicy::MAX_CAPACITY / 2 + 1 })
        );
        assert_eq!(
            GrowthPolicy::new(usize::MAX, 2).unwrap().next_capacity(0),
            Err(CoreError::CapacityOverflow { capacity: 0 })
        );
        assert_eq!(
            GrowthPolicy::new(GrowthPolicy::MAX_CAPACITY, 2).unwrap().next_capacity(0),
            Ok(GrowthPolicy::MAX_CAPACITY)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json_with_defaults() {
        let p: GrowthPolicy = serde_json::from_str(r#"{ "factor": 3 }"#).unwrap();
        assert_eq!(p, GrowthPolicy { min_capacity: 8, factor: 3 });
        assert!(p.validate().is_ok());

        let bad: GrowthPolicy = serde_json::from_str(r#"{ "min_capacity": 4, "factor": 1 }"#).unwrap();
        assert!(bad.validate().is_err());

        assert!(serde_json::from_str::<GrowthPolicy>(r#"{ "growth": 2 }"#).is_err());
    }
}
