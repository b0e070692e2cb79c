//! Per-combatant deck: draw pile, discard pile, reshuffle-on-empty.
//!
//! A deck owns its own RNG stream so that shuffling one side's deck
//! never perturbs the other side's sequence. Cards are never lost:
//! everything dealt out of `draw` is expected back through
//! [`Deck::discard`] or [`Deck::reinsert_after_play`], and the total
//! across both piles plus outstanding hands stays constant.

use crate::cards::CardDefinition;
use crate::core::{DuelRng, PlayedCardPolicy};

/// Draw and discard piles for one combatant.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<CardDefinition>,
    discard_pile: Vec<CardDefinition>,
    rng: DuelRng,
}

impl Deck {
    /// Create a deck from a starting card list, shuffled.
    #[must_use]
    pub fn new(cards: Vec<CardDefinition>, mut rng: DuelRng) -> Self {
        let mut draw_pile = cards;
        rng.shuffle(&mut draw_pile);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Draw up to `n` cards from the top of the draw pile.
    ///
    /// If the draw pile runs out mid-draw, the discard pile is
    /// reshuffled into it and drawing continues. If both piles are
    /// empty the result is short - never an error; callers must
    /// tolerate fewer cards than requested.
    pub fn draw(&mut self, n: usize) -> Vec<CardDefinition> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile = std::mem::take(&mut self.discard_pile);
                self.rng.shuffle(&mut self.draw_pile);
            }
            // Top of the pile is the end of the vec.
            match self.draw_pile.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: CardDefinition) {
        self.discard_pile.push(card);
    }

    /// Return a played card straight into the draw pile and reshuffle,
    /// keeping it in active circulation.
    pub fn reinsert_after_play(&mut self, card: CardDefinition) {
        self.draw_pile.push(card);
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Return a played card according to the configured policy.
    pub fn return_played(&mut self, card: CardDefinition, policy: PlayedCardPolicy) {
        match policy {
            PlayedCardPolicy::ReinsertIntoDrawPile => self.reinsert_after_play(card),
            PlayedCardPolicy::Discard => self.discard(card),
        }
    }

    /// Cards currently in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards currently in the discard pile.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards held by the deck across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// True if both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }
}
