//! # duel-core
//!
//! A turn-based elemental card duel engine: a human-driven player and a
//! scripted opponent draw from private decks, spend regenerating energy
//! to play cards, and resolve combat through an elemental restraint
//! cycle (Yin beats Dark beats Light beats Yin; Blank is neutral).
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine is a synchronous state
//!    machine with one suspension point (the player's card choice).
//!    Rendering, input, and pacing live entirely outside.
//!
//! 2. **Deterministic**: All randomness flows through an explicit
//!    seeded RNG with per-purpose streams; a seed replays a match.
//!
//! 3. **Configuration Over Convention**: Health, energy, the forfeit
//!    penalty, and where played cards go are [`core::DuelConfig`]
//!    settings, not hardcoded rules.
//!
//! 4. **Strong Exception Safety**: A rejected action (bad index,
//!    unaffordable card, finished match) mutates nothing.
//!
//! ## Modules
//!
//! - `cards`: Elements, the restraint relation, card definitions, catalog
//! - `core`: Configuration and deterministic RNG
//! - `deck`: Draw/discard piles with reshuffle-on-empty
//! - `combatant`: Per-side health, energy, and hand state
//! - `policy`: Decision sources (external input, random-affordable)
//! - `battle`: Pure combat resolution
//! - `duel`: The match controller and its presentation-facing API
//!
//! ## Example
//!
//! ```
//! use duel_core::cards::random_deck;
//! use duel_core::core::DuelRng;
//! use duel_core::duel::Duel;
//!
//! let mut rng = DuelRng::new(42);
//! let mut duel = Duel::new(random_deck(&mut rng), random_deck(&mut rng), 42);
//!
//! // Play the first affordable card, or skip
//! let playable = duel.player().playable_indices();
//! let report = match playable.first() {
//!     Some(&index) => duel.play_card(index).unwrap(),
//!     None => duel.skip_turn().unwrap(),
//! };
//! assert_eq!(report.turn, 1);
//! ```

pub mod battle;
pub mod cards;
pub mod combatant;
pub mod core;
pub mod deck;
pub mod duel;
pub mod error;
pub mod policy;

// Re-export commonly used types
pub use crate::battle::{resolve, Resolution};
pub use crate::cards::{
    balanced_set, compare_restraint, random_deck, CardDefinition, CardId, Catalog, EffectSet,
    Element,
};
pub use crate::combatant::Combatant;
pub use crate::core::{DuelConfig, DuelRng, PlayedCardPolicy};
pub use crate::deck::Deck;
pub use crate::duel::{
    AppliedEffect, Duel, DuelBuilder, DuelStatus, EffectKind, Phase, RoundOutcome, Side,
    TurnReport,
};
pub use crate::error::{DuelError, Result};
pub use crate::policy::{Decision, DecisionSource, ExternalInput, RandomAffordable};
