//! Match configuration.
//!
//! The two behaviors the source material disagrees on - where a played
//! card goes and how much an opponent forfeit costs - are configuration
//! points here, not hardcoded rules.

use serde::{Deserialize, Serialize};

/// Where a played card goes once it has resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayedCardPolicy {
    /// Return the card to the draw pile and reshuffle, keeping it in
    /// active circulation (default).
    #[default]
    ReinsertIntoDrawPile,
    /// Send the card to the discard pile; it re-enters circulation
    /// only when the draw pile runs out.
    Discard,
}

/// Configuration for a duel.
///
/// Defaults match the observed game: 30 health, 10 energy capacity,
/// 3 energy per turn, 4-card opening hand, forfeit penalty 3, played
/// cards reinserted into the draw pile.
///
/// ## Example
///
/// ```
/// use duel_core::core::{DuelConfig, PlayedCardPolicy};
///
/// let config = DuelConfig::default()
///     .with_forfeit_penalty(5)
///     .with_played_card_policy(PlayedCardPolicy::Discard);
///
/// assert_eq!(config.forfeit_penalty, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Starting and maximum health for both sides.
    pub max_health: i32,

    /// Energy capacity for both sides.
    pub max_energy: i32,

    /// Energy regenerated at the start of each turn.
    pub energy_per_turn: i32,

    /// Cards drawn at match start.
    pub starting_hand_size: usize,

    /// Health the scripted opponent loses when it has no affordable
    /// card to play. Observed values range from 3 to 5.
    pub forfeit_penalty: i32,

    /// Where played cards go after resolving.
    pub played_card_policy: PlayedCardPolicy,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            max_health: 30,
            max_energy: 10,
            energy_per_turn: 3,
            starting_hand_size: 4,
            forfeit_penalty: 3,
            played_card_policy: PlayedCardPolicy::default(),
        }
    }
}

impl DuelConfig {
    /// Set the maximum health.
    #[must_use]
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = health;
        self
    }

    /// Set the energy capacity.
    #[must_use]
    pub fn with_max_energy(mut self, energy: i32) -> Self {
        self.max_energy = energy;
        self
    }

    /// Set the per-turn energy regeneration.
    #[must_use]
    pub fn with_energy_per_turn(mut self, energy: i32) -> Self {
        self.energy_per_turn = energy;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the opponent forfeit penalty.
    #[must_use]
    pub fn with_forfeit_penalty(mut self, penalty: i32) -> Self {
        self.forfeit_penalty = penalty;
        self
    }

    /// Set the played-card destination policy.
    #[must_use]
    pub fn with_played_card_policy(mut self, policy: PlayedCardPolicy) -> Self {
        self.played_card_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::default();
        assert_eq!(config.max_health, 30);
        assert_eq!(config.max_energy, 10);
        assert_eq!(config.energy_per_turn, 3);
        assert_eq!(config.starting_hand_size, 4);
        assert_eq!(config.forfeit_penalty, 3);
        assert_eq!(
            config.played_card_policy,
            PlayedCardPolicy::ReinsertIntoDrawPile
        );
    }

    #[test]
    fn test_builder() {
        let config = DuelConfig::default()
            .with_max_health(20)
            .with_energy_per_turn(4)
            .with_forfeit_penalty(5)
            .with_played_card_policy(PlayedCardPolicy::Discard);

        assert_eq!(config.max_health, 20);
        assert_eq!(config.energy_per_turn, 4);
        assert_eq!(config.forfeit_penalty, 5);
        assert_eq!(config.played_card_policy, PlayedCardPolicy::Discard);
    }

    #[test]
    fn test_serialization() {
        let config = DuelConfig::default().with_forfeit_penalty(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: DuelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
