//! Estimation aggregator.
//!
//! One entry point per search feature, each a pure composition: pick the
//! matching space-size calculator, pick the matching hit-rate estimator,
//! hand both to [`build_estimation`]. The result feeds the host's
//! confirmation gate, which prompts the user before an oversized search is
//! delegated to the native engine.

use crate::filter::{IvFilter, PokemonFilter, TrainerFilter};
use crate::rate;
use crate::space::{self, SearchWindow};

/// Default estimated-count threshold above which the host should warn.
pub const DEFAULT_WARNING_THRESHOLD: u64 = 50_000;

/// Outcome of one estimation, created fresh per call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimationResult {
    /// Number of parameter combinations the search will enumerate.
    pub search_space_size: u64,
    /// Probability that a random combination passes the filter.
    pub hit_rate: f64,
    /// `round(search_space_size * hit_rate)`.
    pub estimated_count: u64,
    /// Whether `estimated_count` exceeds the caller's threshold.
    pub exceeds_threshold: bool,
}

impl EstimationResult {
    /// Whether the search space itself is empty.
    pub fn is_empty(&self) -> bool {
        self.search_space_size == 0
    }
}

/// Combine a space size and a hit rate into a threshold decision.
pub fn build_estimation(search_space_size: u64, hit_rate: f64, threshold: u64) -> EstimationResult {
    let estimated_count = (search_space_size as f64 * hit_rate).round() as u64;
    tracing::debug!(
        search_space_size,
        hit_rate,
        estimated_count,
        threshold,
        "built search estimation"
    );
    EstimationResult {
        search_space_size,
        hit_rate,
        estimated_count,
        exceeds_threshold: estimated_count > threshold,
    }
}

/// Space size for the generate-then-filter list features: every seed is
/// advanced from the user's offset up to the advance cap.
pub fn list_search_space(seed_count: u64, max_advance: u64, user_offset: u64) -> u64 {
    seed_count * max_advance.saturating_sub(user_offset)
}

/// Estimate a datetime search for a target trainer identity.
pub fn estimate_trainer_seed_search(
    window: &SearchWindow,
    filter: &TrainerFilter,
    threshold: u64,
) -> EstimationResult {
    build_estimation(
        window.search_space(),
        rate::trainer_filter_hit_rate(filter),
        threshold,
    )
}

/// Estimate a datetime search for egg results.
pub fn estimate_egg_seed_search(
    window: &SearchWindow,
    filter: Option<&PokemonFilter>,
    masuda_method: bool,
    threshold: u64,
) -> EstimationResult {
    build_estimation(
        window.search_space(),
        rate::egg_filter_hit_rate(filter, masuda_method),
        threshold,
    )
}

/// Estimate a datetime search for wild/static encounter results.
pub fn estimate_pokemon_seed_search(
    window: &SearchWindow,
    filter: Option<&PokemonFilter>,
    threshold: u64,
) -> EstimationResult {
    build_estimation(
        window.search_space(),
        rate::pokemon_filter_hit_rate(filter),
        threshold,
    )
}

/// Estimate an IV-constrained sweep of the full 32-bit seed space.
pub fn estimate_mtseed_search(filter: Option<&IvFilter>, threshold: u64) -> EstimationResult {
    let hit_rate = filter.map_or(1.0, rate::iv_filter_hit_rate);
    build_estimation(space::mtseed_search_space(), hit_rate, threshold)
}

/// Estimate a generate-then-filter egg list.
pub fn estimate_egg_list(
    seed_count: u64,
    max_advance: u64,
    user_offset: u64,
    filter: Option<&PokemonFilter>,
    masuda_method: bool,
    threshold: u64,
) -> EstimationResult {
    build_estimation(
        list_search_space(seed_count, max_advance, user_offset),
        rate::egg_filter_hit_rate(filter, masuda_method),
        threshold,
    )
}

/// Estimate a generate-then-filter encounter list.
pub fn estimate_pokemon_list(
    seed_count: u64,
    max_advance: u64,
    user_offset: u64,
    filter: Option<&PokemonFilter>,
    threshold: u64,
) -> EstimationResult {
    build_estimation(
        list_search_space(seed_count, max_advance, user_offset),
        rate::pokemon_filter_hit_rate(filter),
        threshold,
    )
}
