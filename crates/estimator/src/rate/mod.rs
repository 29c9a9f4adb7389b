//! Hit-rate estimators.
//!
//! Each estimator returns the probability that a uniformly random element of
//! the search space satisfies a filter. Sub-filters are modeled as
//! independent, so rates compose by multiplication; an absent sub-filter
//! contributes a factor of 1.

mod shiny;

pub use shiny::shiny_hit_rate;

use crate::filter::{
    HIDDEN_POWER_LEVEL_MAX, HIDDEN_POWER_LEVEL_MIN, HiddenPowerTypes, IvFilter, IvRange,
    NatureSet, PokemonFilter, TrainerFilter,
};

/// Size of the per-stat random value domain.
///
/// The native engine draws each stat from 32 values: the visible 0-31 range
/// plus an "unknown" sentinel above it. The denominator must stay 32 to match
/// that domain; dividing by 31 would overestimate every per-stat rate.
pub const IV_VALUE_DOMAIN: f64 = 32.0;

/// Number of discrete hidden-power levels (30 through 70 inclusive).
pub const HIDDEN_POWER_LEVEL_DOMAIN: f64 =
    (HIDDEN_POWER_LEVEL_MAX - HIDDEN_POWER_LEVEL_MIN + 1) as f64;

/// Flat approximation for a gender constraint.
///
/// Real gender odds vary per species; the model deliberately uses an even
/// split and documents the inaccuracy rather than carrying species data.
pub const GENDER_RATE_APPROX: f64 = 0.5;

/// Flat approximation for an ability-slot constraint.
///
/// Deliberately does not special-case the hidden slot; same reasoning as
/// [`GENDER_RATE_APPROX`].
pub const ABILITY_SLOT_RATE_APPROX: f64 = 0.5;

/// Matching trainer-ID values per 65536 for an exact ID constraint.
const EXACT_ID_RATE: f64 = 1.0 / 65_536.0;

/// Personality values per 65536 that are shiny for a fixed trainer.
const SHINY_PID_RATE: f64 = 8.0 / 65_536.0;

/// Probability that one stat's random IV lands in `range`.
pub fn iv_stat_hit_rate(range: IvRange) -> f64 {
    range.len() as f64 / IV_VALUE_DOMAIN
}

/// Probability that a random IV spread satisfies `filter`.
///
/// Product of the six per-stat rates, a type-subset factor when hidden-power
/// types are constrained, and a level factor when a minimum hidden-power
/// level is constrained.
pub fn iv_filter_hit_rate(filter: &IvFilter) -> f64 {
    let mut rate: f64 = filter.stat_ranges().iter().map(|r| iv_stat_hit_rate(*r)).product();

    if let Some(types) = filter.hidden_power_types {
        rate *= types.len() as f64 / HiddenPowerTypes::DOMAIN_SIZE as f64;
    }
    if let Some(level) = filter.min_hidden_power {
        let accepted = (HIDDEN_POWER_LEVEL_MAX - level.get() + 1) as f64;
        rate *= accepted / HIDDEN_POWER_LEVEL_DOMAIN;
    }
    rate
}

/// Probability that a random individual satisfies `filter`.
///
/// The stats sub-filter is always treated as passing: its true rate depends
/// on per-species base stats the estimator does not carry.
pub fn filter_hit_rate(filter: &PokemonFilter, masuda_method: bool) -> f64 {
    let mut rate = 1.0;

    if let Some(ivs) = &filter.ivs {
        rate *= iv_filter_hit_rate(ivs);
    }
    if let Some(natures) = filter.natures {
        rate *= natures.len() as f64 / NatureSet::DOMAIN_SIZE as f64;
    }
    if filter.gender.is_some() {
        rate *= GENDER_RATE_APPROX;
    }
    if filter.ability.is_some() {
        rate *= ABILITY_SLOT_RATE_APPROX;
    }
    if let Some(kind) = filter.shiny {
        rate *= shiny_hit_rate(kind, masuda_method);
    }
    // filter.stats intentionally contributes nothing.
    rate
}

/// Hit rate for an egg-result filter. Eggs are the only context where the
/// Masuda method changes the shininess table, so the flag is forwarded.
pub fn egg_filter_hit_rate(filter: Option<&PokemonFilter>, masuda_method: bool) -> f64 {
    filter.map_or(1.0, |f| filter_hit_rate(f, masuda_method))
}

/// Hit rate for a wild/static encounter filter; always uses the standard
/// shininess table.
pub fn pokemon_filter_hit_rate(filter: Option<&PokemonFilter>) -> f64 {
    filter.map_or(1.0, |f| filter_hit_rate(f, false))
}

/// Probability that a random new-game seed satisfies `filter`.
///
/// Trainer and secret IDs are uniform over 65536 values each; the shiny
/// personality constraint accepts the 8 matching values per 65536.
pub fn trainer_filter_hit_rate(filter: &TrainerFilter) -> f64 {
    let mut rate = 1.0;

    if filter.trainer_id.is_some() {
        rate *= EXACT_ID_RATE;
    }
    if filter.secret_id.is_some() {
        rate *= EXACT_ID_RATE;
    }
    if filter.shiny_pid.is_some() {
        rate *= SHINY_PID_RATE;
    }
    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Gender, HiddenPowerLevel, ShinyKind};

    #[test]
    fn full_stat_range_has_unit_rate() {
        assert_eq!(iv_stat_hit_rate(IvRange::full()), 1.0);
    }

    #[test]
    fn exact_stat_rate_is_one_in_32() {
        assert_eq!(iv_stat_hit_rate(IvRange::exact(31).unwrap()), 1.0 / 32.0);
    }

    #[test]
    fn unconstrained_iv_filter_has_unit_rate() {
        assert_eq!(iv_filter_hit_rate(&IvFilter::any()), 1.0);
    }

    #[test]
    fn six_exact_stats_compound_to_one_in_2_pow_30() {
        let exact = IvRange::exact(31).unwrap();
        let filter = IvFilter {
            hp: exact,
            atk: exact,
            def: exact,
            spa: exact,
            spd: exact,
            spe: exact,
            ..IvFilter::any()
        };
        assert_eq!(iv_filter_hit_rate(&filter), (1.0f64 / 32.0).powi(6));
    }

    #[test]
    fn hidden_power_sub_filters_multiply_in() {
        let filter = IvFilter {
            hidden_power_types: Some(HiddenPowerTypes::FIRE | HiddenPowerTypes::ICE),
            min_hidden_power: Some(HiddenPowerLevel::new(70).unwrap()),
            ..IvFilter::any()
        };
        // 2 of 16 types, 1 of 41 levels.
        assert_eq!(iv_filter_hit_rate(&filter), (2.0 / 16.0) * (1.0 / 41.0));
    }

    #[test]
    fn minimum_level_of_30_accepts_every_level() {
        let filter = IvFilter {
            min_hidden_power: Some(HiddenPowerLevel::new(30).unwrap()),
            ..IvFilter::any()
        };
        assert_eq!(iv_filter_hit_rate(&filter), 1.0);
    }

    #[test]
    fn absent_filter_has_unit_rate_for_any_method() {
        assert_eq!(egg_filter_hit_rate(None, false), 1.0);
        assert_eq!(egg_filter_hit_rate(None, true), 1.0);
        assert_eq!(pokemon_filter_hit_rate(None), 1.0);
    }

    #[test]
    fn empty_pokemon_filter_has_unit_rate() {
        assert_eq!(pokemon_filter_hit_rate(Some(&PokemonFilter::any())), 1.0);
    }

    #[test]
    fn present_sub_filters_multiply_independently() {
        let filter = PokemonFilter {
            natures: Some(NatureSet::ADAMANT),
            gender: Some(Gender::Female),
            shiny: Some(ShinyKind::Any),
            ..PokemonFilter::any()
        };
        let expected = (1.0 / 25.0) * GENDER_RATE_APPROX * (8.0 / 65_536.0);
        assert_eq!(filter_hit_rate(&filter, false), expected);
    }

    #[test]
    fn stats_constraint_is_excluded_from_the_model() {
        let filter = PokemonFilter {
            stats: Some(Default::default()),
            ..PokemonFilter::any()
        };
        assert_eq!(filter_hit_rate(&filter, false), 1.0);
    }

    #[test]
    fn widening_a_stat_range_never_decreases_the_rate() {
        let mut previous = 0.0;
        for max in 0..=31 {
            let filter = IvFilter {
                spe: IvRange::new(0, max).unwrap(),
                ..IvFilter::any()
            };
            let rate = iv_filter_hit_rate(&filter);
            assert!(rate >= previous, "rate shrank when widening to 0-{max}");
            previous = rate;
        }
    }

    #[test]
    fn trainer_constraints_multiply_independently() {
        assert_eq!(trainer_filter_hit_rate(&TrainerFilter::any()), 1.0);

        let tid_only = TrainerFilter {
            trainer_id: Some(12_345),
            ..TrainerFilter::any()
        };
        assert_eq!(trainer_filter_hit_rate(&tid_only), 1.0 / 65_536.0);

        let full = TrainerFilter {
            trainer_id: Some(12_345),
            secret_id: Some(54_321),
            shiny_pid: Some(0xDEAD_BEEF),
        };
        let expected = (1.0 / 65_536.0) * (1.0 / 65_536.0) * (8.0 / 65_536.0);
        assert_eq!(trainer_filter_hit_rate(&full), expected);
    }
}
