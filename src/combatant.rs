//! Combatant state: health, energy, hand, and owned deck.
//!
//! A single `Combatant` type serves both sides of the duel. What
//! differs between the human-driven side and the scripted side is how
//! a card index gets chosen, and that lives in [`crate::policy`], not
//! here. The match controller owns all health/energy mutation beyond
//! the bookkeeping a combatant does on itself (energy regeneration,
//! draw and play accounting).

use smallvec::SmallVec;

use crate::cards::CardDefinition;
use crate::core::{DuelConfig, DuelRng, PlayedCardPolicy};
use crate::deck::Deck;
use crate::error::{DuelError, Result};

/// One side of a duel.
///
/// Created with an empty hand and zero energy; the opening draw and
/// the per-turn sequence are driven by the match controller.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    max_health: i32,
    health: i32,
    max_energy: i32,
    energy: i32,
    energy_per_turn: i32,
    hand: SmallVec<[CardDefinition; 8]>,
    deck: Deck,
    played_card_policy: PlayedCardPolicy,
}

impl Combatant {
    /// Create a combatant bound to a freshly shuffled deck.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cards: Vec<CardDefinition>,
        rng: DuelRng,
        config: &DuelConfig,
    ) -> Self {
        Self {
            name: name.into(),
            max_health: config.max_health,
            health: config.max_health,
            max_energy: config.max_energy,
            energy: 0,
            energy_per_turn: config.energy_per_turn,
            hand: SmallVec::new(),
            deck: Deck::new(cards, rng),
            played_card_policy: config.played_card_policy,
        }
    }

    /// Regenerate energy for a new turn, clamped to the cap.
    ///
    /// The match controller calls this exactly once per combatant per
    /// turn; repeated calls over-regenerate.
    pub fn start_turn(&mut self) {
        self.energy = (self.energy + self.energy_per_turn).min(self.max_energy);
    }

    /// True if some card in hand is affordable.
    #[must_use]
    pub fn can_play_any(&self) -> bool {
        self.hand.iter().any(|card| card.cost <= self.energy)
    }

    /// Hand positions whose card is affordable right now.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.cost <= self.energy)
            .map(|(i, _)| i)
            .collect()
    }

    /// Play the card at `index`: deduct its cost, remove it from hand,
    /// and return it to the deck per the played-card policy.
    ///
    /// On rejection (`InvalidIndex`, `InsufficientEnergy`) nothing
    /// changes: hand composition, hand order, and energy are exactly
    /// as before the call.
    pub fn play_card(&mut self, index: usize) -> Result<CardDefinition> {
        let card = self
            .hand
            .get(index)
            .ok_or(DuelError::InvalidIndex(index))?;
        if card.cost > self.energy {
            return Err(DuelError::InsufficientEnergy {
                index,
                cost: card.cost,
                energy: self.energy,
            });
        }

        let card = self.hand.remove(index);
        self.energy -= card.cost;
        self.deck.return_played(card.clone(), self.played_card_policy);
        Ok(card)
    }

    /// Draw one card into hand. No-op if the deck is exhausted.
    pub fn draw_one(&mut self) {
        self.draw(1);
    }

    /// Draw up to `n` cards into hand. Short draws are silently fine.
    pub fn draw(&mut self, n: usize) {
        self.hand.extend(self.deck.draw(n));
    }

    /// Lose health, clamped at zero.
    pub fn take_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "damage must be non-negative");
        self.health = (self.health - amount).max(0);
    }

    /// Restore health, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "heal must be non-negative");
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Restore energy, clamped to the cap.
    pub fn gain_energy(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "energy gain must be non-negative");
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    /// True once health has hit zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Combatant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hand, in order.
    #[must_use]
    pub fn hand(&self) -> &[CardDefinition] {
        &self.hand
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Maximum health.
    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Current energy.
    #[must_use]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Energy cap.
    #[must_use]
    pub fn max_energy(&self) -> i32 {
        self.max_energy
    }

    /// The owned deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards this combatant owns, across deck and hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Element};

    fn card(id: u32, cost: i32) -> CardDefinition {
        CardDefinition::new(CardId::new(id), format!("Card {id}"), Element::Yin, 6, cost)
    }

    fn combatant_with_costs(costs: &[i32]) -> Combatant {
        let cards = costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| card(i as u32, cost))
            .collect();
        let config = DuelConfig::default();
        let mut combatant = Combatant::new("Tester", cards, DuelRng::new(42), &config);
        combatant.draw(costs.len());
        combatant
    }

    #[test]
    fn test_starts_empty_handed_at_zero_energy() {
        let combatant = Combatant::new(
            "Fresh",
            vec![card(0, 1)],
            DuelRng::new(1),
            &DuelConfig::default(),
        );
        assert!(combatant.hand().is_empty());
        assert_eq!(combatant.energy(), 0);
        assert_eq!(combatant.health(), 30);
    }

    #[test]
    fn test_start_turn_regenerates_and_clamps() {
        let mut combatant = combatant_with_costs(&[1]);
        combatant.start_turn();
        assert_eq!(combatant.energy(), 3);

        for _ in 0..10 {
            combatant.start_turn();
        }
        assert_eq!(combatant.energy(), combatant.max_energy());
    }

    #[test]
    fn test_can_play_any() {
        let mut combatant = combatant_with_costs(&[2, 5]);
        assert!(!combatant.can_play_any());

        combatant.start_turn(); // energy 3
        assert!(combatant.can_play_any());
        assert_eq!(combatant.playable_indices().len(), 1);
    }

    #[test]
    fn test_play_card_deducts_and_returns_to_deck() {
        let mut combatant = combatant_with_costs(&[2, 3]);
        combatant.start_turn(); // energy 3
        let total = combatant.total_cards();

        let index = combatant
            .hand()
            .iter()
            .position(|c| c.cost == 2)
            .unwrap();
        let played = combatant.play_card(index).unwrap();

        assert_eq!(played.cost, 2);
        assert_eq!(combatant.energy(), 1);
        assert_eq!(combatant.hand().len(), 1);
        // Reinserted, not lost
        assert_eq!(combatant.total_cards(), total);
        assert_eq!(combatant.deck().discard_pile_len(), 0);
    }

    #[test]
    fn test_play_card_invalid_index_rejected() {
        let mut combatant = combatant_with_costs(&[1, 1]);
        combatant.start_turn();
        let before: Vec<_> = combatant.hand().to_vec();

        assert_eq!(combatant.play_card(5), Err(DuelError::InvalidIndex(5)));
        assert_eq!(combatant.hand(), before.as_slice());
        assert_eq!(combatant.energy(), 3);
    }

    #[test]
    fn test_play_card_unaffordable_leaves_state_untouched() {
        let mut combatant = combatant_with_costs(&[9, 9]);
        combatant.start_turn(); // energy 3
        let before: Vec<_> = combatant.hand().to_vec();

        let err = combatant.play_card(0).unwrap_err();
        assert_eq!(
            err,
            DuelError::InsufficientEnergy {
                index: 0,
                cost: 9,
                energy: 3
            }
        );
        // Hand composition and order identical
        assert_eq!(combatant.hand(), before.as_slice());
        assert_eq!(combatant.energy(), 3);
    }

    #[test]
    fn test_discard_policy_routes_played_cards() {
        let config = DuelConfig::default().with_played_card_policy(PlayedCardPolicy::Discard);
        let mut combatant = Combatant::new(
            "Discarder",
            vec![card(0, 1), card(1, 1)],
            DuelRng::new(3),
            &config,
        );
        combatant.draw(2);
        combatant.start_turn();

        combatant.play_card(0).unwrap();
        assert_eq!(combatant.deck().discard_pile_len(), 1);
        assert_eq!(combatant.deck().draw_pile_len(), 0);
    }

    #[test]
    fn test_draw_one_from_empty_deck_is_noop() {
        let mut combatant = combatant_with_costs(&[1]);
        assert_eq!(combatant.hand().len(), 1);
        combatant.draw_one();
        assert_eq!(combatant.hand().len(), 1);
    }

    #[test]
    fn test_health_clamping() {
        let mut combatant = combatant_with_costs(&[1]);
        combatant.take_damage(40);
        assert_eq!(combatant.health(), 0);
        assert!(combatant.is_defeated());

        combatant.heal(100);
        assert_eq!(combatant.health(), combatant.max_health());
    }

    #[test]
    fn test_energy_gain_clamps() {
        let mut combatant = combatant_with_costs(&[1]);
        combatant.gain_energy(99);
        assert_eq!(combatant.energy(), combatant.max_energy());
    }
}
