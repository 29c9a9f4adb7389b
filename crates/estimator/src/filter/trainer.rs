//! Trainer identity filters.

/// Filter over trainer identity values produced by a new-game seed.
///
/// Each field is an exact-match constraint; absent fields constrain nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerFilter {
    /// Exact visible trainer ID.
    pub trainer_id: Option<u16>,
    /// Exact secret ID.
    pub secret_id: Option<u16>,
    /// Exact personality value that must come out shiny for this trainer.
    pub shiny_pid: Option<u32>,
}

impl TrainerFilter {
    /// Filter accepting every trainer identity.
    pub fn any() -> Self {
        Self::default()
    }
}
