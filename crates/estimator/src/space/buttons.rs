//! Button-combination counting over the console key register.
//!
//! The native search engine tries every subset of the user-selected buttons
//! as a held key combination at boot. Counting those subsets here lets the
//! host warn about oversized searches without invoking the engine at all,
//! so the bit assignment and the exclusion rules below must stay identical
//! to the engine's own enumeration.

use bitflags::bitflags;

bitflags! {
    /// Hardware key register bits, one per physical button.
    ///
    /// The bit values mirror the console's key input register byte for byte;
    /// they are shared verbatim with the native search engine and must never
    /// be reassigned independently of it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        const A      = 0x001;
        const B      = 0x002;
        const SELECT = 0x004;
        const START  = 0x008;
        const RIGHT  = 0x010;
        const LEFT   = 0x020;
        const UP     = 0x040;
        const DOWN   = 0x080;
        const R      = 0x100;
        const L      = 0x200;
        const X      = 0x400;
        const Y      = 0x800;
    }
}

impl Buttons {
    /// L + R + Start + Select: holding all four soft-resets the console,
    /// so the engine never enumerates that chord.
    pub const SOFT_RESET: Buttons = Buttons::L
        .union(Buttons::R)
        .union(Buttons::START)
        .union(Buttons::SELECT);

    const UP_DOWN: Buttons = Buttons::UP.union(Buttons::DOWN);
    const LEFT_RIGHT: Buttons = Buttons::LEFT.union(Buttons::RIGHT);

    /// Whether this exact held combination is one the engine will try.
    ///
    /// Rejected combinations: opposing d-pad directions pressed together
    /// (impossible on the hardware), and the full soft-reset chord.
    pub fn is_valid_combination(self) -> bool {
        !self.contains(Self::UP_DOWN)
            && !self.contains(Self::LEFT_RIGHT)
            && !self.contains(Self::SOFT_RESET)
    }
}

/// Count the valid held-button combinations over a set of selectable buttons.
///
/// Enumerates all `2^n` subsets of the selected buttons (n <= 12, so at most
/// 4096 iterations) and counts those that pass
/// [`Buttons::is_valid_combination`]. The exclusion rules are not orthogonal,
/// so there is deliberately no closed-form shortcut here.
///
/// The empty subset is always valid, so an empty selectable set yields 1.
pub fn count_key_combinations(selectable: Buttons) -> u64 {
    let bits: Vec<Buttons> = selectable.iter().collect();

    let mut count = 0;
    for subset in 0u32..(1u32 << bits.len()) {
        let mut held = Buttons::empty();
        for (i, bit) in bits.iter().enumerate() {
            if subset & (1 << i) != 0 {
                held |= *bit;
            }
        }
        if held.is_valid_combination() {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_counts_only_the_no_press_combination() {
        assert_eq!(count_key_combinations(Buttons::empty()), 1);
    }

    #[test]
    fn single_button_counts_pressed_and_not_pressed() {
        assert_eq!(count_key_combinations(Buttons::A), 2);
    }

    #[test]
    fn opposing_directions_are_never_counted_together() {
        // Subsets of {Up, Down}: {}, {Up}, {Down} are valid; {Up, Down} is not.
        assert_eq!(count_key_combinations(Buttons::UP | Buttons::DOWN), 3);

        // The exclusion holds for every superset that contains the pair.
        let selectable = Buttons::UP | Buttons::DOWN | Buttons::A | Buttons::B;
        // 16 subsets, minus the 4 containing both Up and Down.
        assert_eq!(count_key_combinations(selectable), 12);
    }

    #[test]
    fn left_right_pair_is_excluded() {
        assert_eq!(count_key_combinations(Buttons::LEFT | Buttons::RIGHT), 3);
    }

    #[test]
    fn soft_reset_chord_is_excluded_only_when_complete() {
        // All four soft-reset buttons selectable: 16 subsets, only the full
        // chord is rejected.
        assert_eq!(count_key_combinations(Buttons::SOFT_RESET), 15);

        // Any three of the four are all valid.
        let three = Buttons::L | Buttons::R | Buttons::START;
        assert_eq!(count_key_combinations(three), 8);
    }

    #[test]
    fn full_button_domain_matches_inclusion_exclusion() {
        // 4096 subsets minus (Up+Down) 1024, (Left+Right) 1024, soft-reset 256,
        // re-adding pairwise overlaps 256 + 64 + 64 and subtracting the triple
        // overlap 16: 4096 - 1936 = 2160.
        assert_eq!(count_key_combinations(Buttons::all()), 2160);
    }
}
