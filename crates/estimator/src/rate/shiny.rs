//! Shininess probability tables.
//!
//! Shininess is decided over a 16-bit comparison domain, so both tables
//! express "matching personality values per 65536". The Masuda method
//! re-rolls the personality value, multiplying every entry by six.

use crate::filter::ShinyKind;

/// Matching personality values per [`PID_DOMAIN`] for each shiny category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ShinyTable {
    any: u32,
    star: u32,
    square: u32,
}

/// Size of the 16-bit comparison domain shininess is decided over.
const PID_DOMAIN: f64 = 65_536.0;

/// Standard breeding/encounter odds.
const STANDARD: ShinyTable = ShinyTable {
    any: 8,
    star: 7,
    square: 1,
};

/// Masuda-method odds (six personality re-rolls).
const MASUDA: ShinyTable = ShinyTable {
    any: 48,
    star: 42,
    square: 6,
};

/// Probability that a random individual satisfies the shininess constraint.
pub fn shiny_hit_rate(kind: ShinyKind, masuda_method: bool) -> f64 {
    let table = if masuda_method { MASUDA } else { STANDARD };
    let matching = match kind {
        ShinyKind::Any => table.any,
        ShinyKind::Star => table.star,
        ShinyKind::Square => table.square,
    };
    matching as f64 / PID_DOMAIN
}
