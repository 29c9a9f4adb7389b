//! Hardware timing parameter dimensions (Timer0 / VCount).
//!
//! Initial seeds depend on two boot-time hardware counters. A calibration
//! step gives the caller one or more rectangular regions of the
//! (Timer0, VCount) grid to sweep; their areas add up to this dimension of
//! the search space.

/// One contiguous rectangular region of the 2-D (Timer0, VCount) grid,
/// inclusive on all four bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer0VCountRange {
    pub timer0_min: u16,
    pub timer0_max: u16,
    pub vcount_min: u8,
    pub vcount_max: u8,
}

impl Timer0VCountRange {
    /// Create a region from inclusive bounds.
    pub fn new(timer0_min: u16, timer0_max: u16, vcount_min: u8, vcount_max: u8) -> Self {
        Self {
            timer0_min,
            timer0_max,
            vcount_min,
            vcount_max,
        }
    }

    /// Number of (Timer0, VCount) pairs in the region.
    ///
    /// Either axis inverted makes the region empty.
    pub fn count(&self) -> u64 {
        let timer0 = (self.timer0_max as i64 - self.timer0_min as i64 + 1).max(0) as u64;
        let vcount = (self.vcount_max as i64 - self.vcount_min as i64 + 1).max(0) as u64;
        timer0 * vcount
    }
}

/// Total (Timer0, VCount) pairs across all regions.
///
/// Regions are caller-guaranteed disjoint; overlaps are not deduplicated.
pub fn count_timer0_vcount_combinations(ranges: &[Timer0VCountRange]) -> u64 {
    ranges.iter().map(Timer0VCountRange::count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_area_is_inclusive_on_both_axes() {
        let region = Timer0VCountRange::new(0x1200, 0x1201, 0x60, 0x60);
        assert_eq!(region.count(), 2);
    }

    #[test]
    fn inverted_axis_empties_the_region() {
        let region = Timer0VCountRange::new(0x1201, 0x1200, 0x60, 0x61);
        assert_eq!(region.count(), 0);
    }

    #[test]
    fn region_counts_sum() {
        let regions = [
            Timer0VCountRange::new(0x1100, 0x1101, 0x5f, 0x5f),
            Timer0VCountRange::new(0x1200, 0x1203, 0x60, 0x61),
        ];
        assert_eq!(count_timer0_vcount_combinations(&regions), 2 + 8);
    }

    #[test]
    fn no_regions_means_empty_dimension() {
        assert_eq!(count_timer0_vcount_combinations(&[]), 0);
    }
}
