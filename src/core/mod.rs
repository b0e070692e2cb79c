//! Core engine plumbing: configuration and deterministic RNG.

mod config;
mod rng;

pub use config::{DuelConfig, PlayedCardPolicy};
pub use rng::DuelRng;
