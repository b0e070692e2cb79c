//! Decision sources: who picks the card to play.
//!
//! The two sides of a duel share one `Combatant` type; what differs is
//! how a hand index gets chosen. The human side defers to external
//! input (the engine's single suspension point), the scripted side
//! picks uniformly among affordable cards. Both are injected at match
//! construction.

use crate::cards::CardDefinition;
use crate::core::DuelRng;

/// A decision for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Play the card at this hand index.
    Play(usize),
    /// Play nothing this turn.
    Forfeit,
    /// No decision available here; the caller must supply one
    /// externally (human input).
    Deferred,
}

/// Strategy for choosing which card to play.
///
/// Implementations inspect the hand and available energy but never
/// mutate combatant state; playing the chosen card is the match
/// controller's job.
pub trait DecisionSource: std::fmt::Debug {
    /// Choose an action given the current hand and energy.
    fn choose(&mut self, hand: &[CardDefinition], energy: i32) -> Decision;
}

/// Decision source for the human-driven side.
///
/// Always defers: the presentation layer supplies the index through
/// [`crate::duel::Duel::play_card`] or [`crate::duel::Duel::skip_turn`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalInput;

impl DecisionSource for ExternalInput {
    fn choose(&mut self, _hand: &[CardDefinition], _energy: i32) -> Decision {
        Decision::Deferred
    }
}

/// Scripted policy: uniformly random among affordable cards.
///
/// Forfeits when nothing in hand is affordable.
#[derive(Clone, Debug)]
pub struct RandomAffordable {
    rng: DuelRng,
}

impl RandomAffordable {
    /// Create the policy with its own RNG stream.
    #[must_use]
    pub fn new(rng: DuelRng) -> Self {
        Self { rng }
    }
}

impl DecisionSource for RandomAffordable {
    fn choose(&mut self, hand: &[CardDefinition], energy: i32) -> Decision {
        let affordable: Vec<usize> = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.cost <= energy)
            .map(|(i, _)| i)
            .collect();

        match self.rng.choose(&affordable) {
            Some(&index) => Decision::Play(index),
            None => Decision::Forfeit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, Element};

    fn card(id: u32, cost: i32) -> CardDefinition {
        CardDefinition::new(CardId::new(id), format!("Card {id}"), Element::Dark, 5, cost)
    }

    #[test]
    fn test_external_input_always_defers() {
        let mut source = ExternalInput;
        assert_eq!(source.choose(&[card(0, 0)], 10), Decision::Deferred);
        assert_eq!(source.choose(&[], 0), Decision::Deferred);
    }

    #[test]
    fn test_random_affordable_only_picks_affordable() {
        let hand = vec![card(0, 2), card(1, 8), card(2, 3), card(3, 10)];
        let mut policy = RandomAffordable::new(DuelRng::new(42));

        for _ in 0..50 {
            match policy.choose(&hand, 3) {
                Decision::Play(i) => assert!(i == 0 || i == 2, "picked unaffordable index {i}"),
                other => panic!("expected a play, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_random_affordable_covers_all_affordable() {
        let hand = vec![card(0, 1), card(1, 1), card(2, 1)];
        let mut policy = RandomAffordable::new(DuelRng::new(7));

        let mut seen = [false; 3];
        for _ in 0..100 {
            if let Decision::Play(i) = policy.choose(&hand, 5) {
                seen[i] = true;
            }
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_random_affordable_forfeits_when_broke() {
        let hand = vec![card(0, 4), card(1, 6)];
        let mut policy = RandomAffordable::new(DuelRng::new(1));
        assert_eq!(policy.choose(&hand, 3), Decision::Forfeit);
        assert_eq!(policy.choose(&[], 10), Decision::Forfeit);
    }

    #[test]
    fn test_random_affordable_is_seed_deterministic() {
        let hand = vec![card(0, 1), card(1, 1), card(2, 1), card(3, 1)];
        let mut a = RandomAffordable::new(DuelRng::new(9));
        let mut b = RandomAffordable::new(DuelRng::new(9));

        for _ in 0..20 {
            assert_eq!(a.choose(&hand, 5), b.choose(&hand, 5));
        }
    }
}
