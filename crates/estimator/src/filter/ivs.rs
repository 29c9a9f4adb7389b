//! Individual-value (IV) filters.
//!
//! Each of the six stats carries an IV in 0-31. The native engine draws stat
//! values from a 32-value domain (0-31 plus an "unknown" sentinel used before
//! calibration), which is why rate math elsewhere divides by 32 rather than
//! 31; the types here only enforce the 0-31 bounds a user can actually ask
//! for.

use bitflags::bitflags;

use super::error::FilterError;

/// Highest IV a stat can have.
pub const IV_MAX: u8 = 31;

/// Lowest selectable hidden-power level.
pub const HIDDEN_POWER_LEVEL_MIN: u8 = 30;
/// Highest selectable hidden-power level.
pub const HIDDEN_POWER_LEVEL_MAX: u8 = 70;

/// Inclusive IV range for a single stat.
///
/// Bounds are validated into 0-31 at construction. An inverted range is
/// allowed and matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvRange {
    min: u8,
    max: u8,
}

impl IvRange {
    /// Create a range from inclusive bounds, rejecting bounds above 31.
    pub fn new(min: u8, max: u8) -> Result<Self, FilterError> {
        if min > IV_MAX {
            return Err(FilterError::IvOutOfRange(min));
        }
        if max > IV_MAX {
            return Err(FilterError::IvOutOfRange(max));
        }
        Ok(Self { min, max })
    }

    /// Range matching a single exact IV.
    pub fn exact(value: u8) -> Result<Self, FilterError> {
        Self::new(value, value)
    }

    /// The full 0-31 range.
    pub const fn full() -> Self {
        Self { min: 0, max: IV_MAX }
    }

    pub const fn min(&self) -> u8 {
        self.min
    }

    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Number of IVs the range accepts (0 when inverted).
    pub fn len(&self) -> u64 {
        (self.max as i64 - self.min as i64 + 1).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IvRange {
    fn default() -> Self {
        Self::full()
    }
}

bitflags! {
    /// Subset of the 16 hidden-power types, in national type order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HiddenPowerTypes: u16 {
        const FIGHTING = 1 << 0;
        const FLYING   = 1 << 1;
        const POISON   = 1 << 2;
        const GROUND   = 1 << 3;
        const ROCK     = 1 << 4;
        const BUG      = 1 << 5;
        const GHOST    = 1 << 6;
        const STEEL    = 1 << 7;
        const FIRE     = 1 << 8;
        const WATER    = 1 << 9;
        const GRASS    = 1 << 10;
        const ELECTRIC = 1 << 11;
        const PSYCHIC  = 1 << 12;
        const ICE      = 1 << 13;
        const DRAGON   = 1 << 14;
        const DARK     = 1 << 15;
    }
}

impl HiddenPowerTypes {
    /// Number of hidden-power type categories in the domain.
    pub const DOMAIN_SIZE: u32 = 16;

    /// Number of selected types.
    pub const fn len(&self) -> u32 {
        self.bits().count_ones()
    }
}

/// Minimum hidden-power level constraint, validated into 30-70.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiddenPowerLevel(u8);

impl HiddenPowerLevel {
    pub fn new(level: u8) -> Result<Self, FilterError> {
        if !(HIDDEN_POWER_LEVEL_MIN..=HIDDEN_POWER_LEVEL_MAX).contains(&level) {
            return Err(FilterError::HiddenPowerLevelOutOfRange(level));
        }
        Ok(Self(level))
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Filter over the six IVs plus the derived hidden-power attribute.
///
/// The hidden-power sub-filters are optional; when absent they constrain
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvFilter {
    pub hp: IvRange,
    pub atk: IvRange,
    pub def: IvRange,
    pub spa: IvRange,
    pub spd: IvRange,
    pub spe: IvRange,
    pub hidden_power_types: Option<HiddenPowerTypes>,
    pub min_hidden_power: Option<HiddenPowerLevel>,
}

impl IvFilter {
    /// Filter accepting every IV spread.
    pub fn any() -> Self {
        Self::default()
    }

    /// The six per-stat ranges in fixed stat order.
    pub fn stat_ranges(&self) -> [IvRange; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }
}
