//! Search-space and hit-rate estimation for exhaustive seed searches.
//!
//! `seed-estimator` predicts, before the native search engine is launched,
//! roughly how many results an exhaustive search will produce, so the host
//! can warn the user or abort instead of silently generating hundreds of
//! thousands of rows. Three layers compose by value, with data flowing one
//! way:
//!
//! - [`space`] counts the discrete parameter space a search will enumerate
//!   (calendar days, clock seconds, hardware timing regions, held-button
//!   combinations).
//! - [`rate`] estimates the probability that a random element of that space
//!   passes a [`filter`].
//! - [`estimate`] multiplies the two, rounds, and compares against a warning
//!   threshold.
//!
//! Everything is pure: no I/O, no shared state, no call that can take
//! unbounded time (the one loop, button-subset enumeration, is capped at
//! 4096 iterations). Estimates are statistical, never exact, and never a
//! substitute for running the search.

pub mod estimate;
pub mod filter;
pub mod rate;
pub mod space;

pub use estimate::{
    DEFAULT_WARNING_THRESHOLD, EstimationResult, build_estimation, estimate_egg_list,
    estimate_egg_seed_search, estimate_mtseed_search, estimate_pokemon_list,
    estimate_pokemon_seed_search, estimate_trainer_seed_search, list_search_space,
};
pub use filter::{
    AbilitySlot, FilterError, Gender, HiddenPowerLevel, HiddenPowerTypes, IvFilter, IvRange,
    NatureSet, PokemonFilter, ShinyKind, StatRanges, TrainerFilter,
};
pub use space::{
    Buttons, DateRange, SearchWindow, TimeRange, Timer0VCountRange, count_key_combinations,
    count_timer0_vcount_combinations, datetime_search_space, mtseed_search_space,
};
