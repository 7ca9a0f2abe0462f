//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief:

/// Outcome of the round on screen. `Won` is the reveal pause before promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// What the board should show, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Guessing,
    Revealing,
    Lost,
}

impl Phase {
    pub fn label(self) -> (&'static str, u32) {
        match self {
            Phase::Loading => ("Loading", 0x93c5fd),
            Phase::Guessing => ("Your call", 0x34d399),
            Phase::Revealing => ("Correct!", 0xfbbf24),
            Phase::Lost => ("Game Over", 0xf87171),
        }
    }
}
