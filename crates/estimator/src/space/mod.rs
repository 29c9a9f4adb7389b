//! Search-space size calculators.
//!
//! Each submodule counts one dimension of the parameter space the native
//! engine enumerates; [`SearchWindow`] multiplies them into the shared
//! datetime search-space formula. All counters are pure and clamp inverted
//! ranges to zero rather than failing.

pub mod buttons;
pub mod calendar;
pub mod hardware;

pub use buttons::{Buttons, count_key_combinations};
pub use calendar::{DateRange, TimeRange};
pub use hardware::{Timer0VCountRange, count_timer0_vcount_combinations};

/// Everything a datetime-driven search sweeps: the calendar window, the
/// intra-day clock window, the calibrated hardware regions, and the buttons
/// the user allows the engine to hold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchWindow {
    pub dates: DateRange,
    pub times: TimeRange,
    pub timer0_vcount: Vec<Timer0VCountRange>,
    pub buttons: Buttons,
}

impl SearchWindow {
    /// Total number of boot configurations the window spans.
    pub fn search_space(&self) -> u64 {
        datetime_search_space(
            &self.dates,
            &self.times,
            &self.timer0_vcount,
            count_key_combinations(self.buttons),
        )
    }
}

/// Shared space-size formula for every datetime-driven search feature:
/// days x seconds-per-day x hardware pairs x held-button combinations.
pub fn datetime_search_space(
    dates: &DateRange,
    times: &TimeRange,
    timer0_vcount: &[Timer0VCountRange],
    key_combinations: u64,
) -> u64 {
    dates.count_days()
        * times.count_seconds()
        * count_timer0_vcount_combinations(timer0_vcount)
        * key_combinations
}

/// Size of the full 32-bit seed space swept by a raw seed search.
///
/// Named so call sites read like the other space calculators.
pub const fn mtseed_search_space() -> u64 {
    1 << 32
}
