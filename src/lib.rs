//! Higher/lower guessing game over recipe calorie counts.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod provider;
pub mod telemetry;
