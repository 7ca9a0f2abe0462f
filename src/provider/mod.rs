//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:38:03 Saturday
//! brief: where candidates come from

mod spoonacular;
pub mod wire;

pub use spoonacular::SpoonacularProvider;

use crate::{error::FetchError, game::Candidate};

/// Blocking source of random recipes. The controller runs it off the UI thread.
pub trait RecipeProvider: Send + Sync {
    fn fetch_random_candidate(&self) -> Result<Candidate, FetchError>;
}
