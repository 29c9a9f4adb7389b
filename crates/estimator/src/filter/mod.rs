//! Filter value types shared with the native search engine.
//!
//! Filters are immutable value structures validated at construction
//! (out-of-domain bounds are rejected with [`FilterError`]); inverted ranges
//! are legal and simply match nothing. The hit-rate estimators in
//! [`crate::rate`] consume these shapes without further checking.

pub mod error;
pub mod ivs;
pub mod pokemon;
pub mod trainer;

pub use error::FilterError;
pub use ivs::{
    HIDDEN_POWER_LEVEL_MAX, HIDDEN_POWER_LEVEL_MIN, HiddenPowerLevel, HiddenPowerTypes, IV_MAX,
    IvFilter, IvRange,
};
pub use pokemon::{AbilitySlot, Gender, NatureSet, PokemonFilter, ShinyKind, StatRanges};
pub use trainer::TrainerFilter;
