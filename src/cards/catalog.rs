//! Card catalog for definition lookup and starter deck generation.
//!
//! The `Catalog` stores card definitions and provides fast lookup by
//! `CardId`. The engine itself never consults the catalog - decks are
//! built from definition lists up front - but presentation layers and
//! tests use it to resolve ids and to build the balanced starter set.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use super::element::Element;
use crate::core::DuelRng;

/// Number of cards dealt into a starter deck.
pub const STARTER_DECK_SIZE: usize = 15;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use duel_core::cards::{Catalog, CardDefinition, CardId, Element};
///
/// let mut catalog = Catalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Yin Claw", Element::Yin, 8, 3));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Yin Claw");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the balanced starter set.
    #[must_use]
    pub fn with_balanced_set() -> Self {
        let mut catalog = Self::new();
        for card in balanced_set() {
            catalog.register(card);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

/// The balanced twelve-card starter set.
///
/// Three cards per element, costs 1-5, with effects spread so every
/// element has at least one plain card.
#[must_use]
pub fn balanced_set() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(CardId::new(0), "Yin Claw", Element::Yin, 8, 3).with_damage_boost(2),
        CardDefinition::new(CardId::new(1), "Shadow Orb", Element::Dark, 6, 2).with_heal(3),
        CardDefinition::new(CardId::new(2), "Light Spear", Element::Light, 7, 4).with_energy_gain(2),
        CardDefinition::new(CardId::new(3), "Void Shield", Element::Blank, 5, 1),
        CardDefinition::new(CardId::new(4), "Yin-Yang Jade", Element::Yin, 6, 3).with_damage_boost(1),
        CardDefinition::new(CardId::new(5), "Night Raid", Element::Dark, 9, 5),
        CardDefinition::new(CardId::new(6), "Holy Mending", Element::Light, 4, 2).with_heal(5),
        CardDefinition::new(CardId::new(7), "Blank Barrier", Element::Blank, 7, 3),
        CardDefinition::new(CardId::new(8), "Shadow Step", Element::Dark, 5, 2).with_energy_gain(1),
        CardDefinition::new(CardId::new(9), "Radiant Blessing", Element::Light, 6, 3).with_heal(4),
        CardDefinition::new(CardId::new(10), "Gloom Shroud", Element::Yin, 7, 4).with_damage_boost(3),
        CardDefinition::new(CardId::new(11), "Void Devour", Element::Blank, 8, 5),
    ]
}

/// Deal a random starter deck: [`STARTER_DECK_SIZE`] cards sampled
/// without replacement from two copies of the balanced set.
#[must_use]
pub fn random_deck(rng: &mut DuelRng) -> Vec<CardDefinition> {
    let mut pool: Vec<CardDefinition> = balanced_set()
        .into_iter()
        .flat_map(|card| [card.clone(), card])
        .collect();
    rng.shuffle(&mut pool);
    pool.truncate(STARTER_DECK_SIZE);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        let card = CardDefinition::new(CardId::new(1), "Test", Element::Blank, 5, 1);
        catalog.register(card.clone());

        assert_eq!(catalog.get(CardId::new(1)), Some(&card));
        assert_eq!(catalog.get(CardId::new(2)), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = Catalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "A", Element::Yin, 1, 1));
        catalog.register(CardDefinition::new(CardId::new(1), "B", Element::Dark, 2, 2));
    }

    #[test]
    fn test_balanced_set_shape() {
        let set = balanced_set();
        assert_eq!(set.len(), 12);

        for element in Element::ALL {
            assert_eq!(set.iter().filter(|c| c.element == element).count(), 3);
        }

        // Ids are distinct
        let catalog = Catalog::with_balanced_set();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_random_deck_size_and_pool() {
        let mut rng = DuelRng::new(7);
        let deck = random_deck(&mut rng);
        assert_eq!(deck.len(), STARTER_DECK_SIZE);

        // No card appears more often than it exists in the doubled pool
        let catalog = Catalog::with_balanced_set();
        for card in &deck {
            assert!(catalog.get(card.id).is_some());
            assert!(deck.iter().filter(|c| c.id == card.id).count() <= 2);
        }
    }

    #[test]
    fn test_random_deck_is_seed_deterministic() {
        let mut a = DuelRng::new(99);
        let mut b = DuelRng::new(99);
        assert_eq!(random_deck(&mut a), random_deck(&mut b));
    }
}
