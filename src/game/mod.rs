//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:08:55 Saturday
//! brief:

mod candidate;
mod controller;
mod guess;
mod render;
pub mod session;
mod status;

pub use candidate::Candidate;
pub use controller::{CalorieGame, GuessHigher, GuessLower, QuitGame, RestartGame};
pub use guess::Guess;
pub use session::{Command, FetchTicket, RevealToken, Session, Slot, Step};
pub use status::{Phase, RoundOutcome};
