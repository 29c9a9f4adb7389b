//! Filters over generated core data (nature, gender, ability, shininess).

use bitflags::bitflags;

use super::ivs::IvFilter;

bitflags! {
    /// Subset of the 25 natures, in personality-value order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NatureSet: u32 {
        const HARDY   = 1 << 0;
        const LONELY  = 1 << 1;
        const BRAVE   = 1 << 2;
        const ADAMANT = 1 << 3;
        const NAUGHTY = 1 << 4;
        const BOLD    = 1 << 5;
        const DOCILE  = 1 << 6;
        const RELAXED = 1 << 7;
        const IMPISH  = 1 << 8;
        const LAX     = 1 << 9;
        const TIMID   = 1 << 10;
        const HASTY   = 1 << 11;
        const SERIOUS = 1 << 12;
        const JOLLY   = 1 << 13;
        const NAIVE   = 1 << 14;
        const MODEST  = 1 << 15;
        const MILD    = 1 << 16;
        const QUIET   = 1 << 17;
        const BASHFUL = 1 << 18;
        const RASH    = 1 << 19;
        const CALM    = 1 << 20;
        const GENTLE  = 1 << 21;
        const SASSY   = 1 << 22;
        const CAREFUL = 1 << 23;
        const QUIRKY  = 1 << 24;
    }
}

impl NatureSet {
    /// Number of nature categories in the domain.
    pub const DOMAIN_SIZE: u32 = 25;

    /// Number of selected natures.
    pub const fn len(&self) -> u32 {
        self.bits().count_ones()
    }
}

/// Binary gender constraint.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

/// Which of the species' ability slots is required.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilitySlot {
    First,
    Second,
    Hidden,
}

/// Required shininess category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ShinyKind {
    /// Either shiny kind.
    Any,
    /// The common shiny kind (star).
    Star,
    /// The rare shiny kind (square).
    Square,
}

/// Inclusive ranges over the six computed battle stats.
///
/// Carried in the filter shape for the native engine's benefit, but excluded
/// from the hit-rate model: an accurate rate would need per-species base
/// stats this crate does not have, so estimation treats a stats constraint
/// as always passing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRanges {
    pub hp: (u16, u16),
    pub atk: (u16, u16),
    pub def: (u16, u16),
    pub spa: (u16, u16),
    pub spd: (u16, u16),
    pub spe: (u16, u16),
}

/// Filter over one generated individual.
///
/// Every sub-filter is optional; an absent sub-filter constrains nothing.
/// Used both for egg results and for wild/static encounter results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonFilter {
    pub ivs: Option<IvFilter>,
    pub natures: Option<NatureSet>,
    pub gender: Option<Gender>,
    pub ability: Option<AbilitySlot>,
    pub shiny: Option<ShinyKind>,
    pub stats: Option<StatRanges>,
}

impl PokemonFilter {
    /// Filter accepting everything.
    pub fn any() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn nature_domain_has_25_categories() {
        assert_eq!(NatureSet::all().len(), NatureSet::DOMAIN_SIZE);
    }

    #[test]
    fn nature_subset_counts_selected_flags() {
        let set = NatureSet::ADAMANT | NatureSet::JOLLY | NatureSet::MODEST | NatureSet::TIMID;
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn categorical_enums_round_trip_through_strings() {
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert_eq!(AbilitySlot::Hidden.to_string(), "hidden");
        assert_eq!(ShinyKind::from_str("square").unwrap(), ShinyKind::Square);
    }
}
