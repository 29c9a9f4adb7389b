//! Boundary validation errors for filter construction.

/// Errors from constructing a filter with out-of-domain values.
///
/// Inverted ranges are never errors (they are empty filters); only values
/// outside the attribute's domain are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// An IV bound was above the 0-31 stat domain.
    #[error("IV bound {0} is outside the 0-31 stat domain")]
    IvOutOfRange(u8),

    /// A hidden-power level was outside the 30-70 level domain.
    #[error("hidden power level {0} is outside the 30-70 domain")]
    HiddenPowerLevelOutOfRange(u8),
}
