//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its
//! element, combat power, energy cost, and on-play effects. A hand or
//! deck holds clones of definitions; two clones of the same definition
//! are interchangeable, there is no per-instance state.

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Unique identifier for a card definition.
///
/// Identifies the card "type" (e.g. "Light Spear"), not a specific
/// copy in a deck or hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// On-play effects of a card, as a closed set of magnitudes.
///
/// A magnitude of zero means the card does not carry that effect.
/// `damage_boost` is folded into the card's final combat value during
/// resolution; `heal` and `energy_gain` apply to the playing side's
/// own health/energy whenever the card is played, independent of the
/// combat outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectSet {
    /// Added to this card's final combat value.
    pub damage_boost: i32,
    /// Restores the playing side's health, clamped to its maximum.
    pub heal: i32,
    /// Restores the playing side's energy, clamped to its maximum.
    pub energy_gain: i32,
}

impl EffectSet {
    /// An effect set with no effects.
    pub const NONE: EffectSet = EffectSet {
        damage_boost: 0,
        heal: 0,
        energy_gain: 0,
    };

    /// True if every magnitude is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duel_core::cards::{CardDefinition, CardId, Element};
///
/// let spear = CardDefinition::new(CardId::new(3), "Light Spear", Element::Light, 7, 4)
///     .with_energy_gain(2);
///
/// assert_eq!(spear.power, 7);
/// assert_eq!(spear.effects.energy_gain, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Element, determining restraint interactions.
    pub element: Element,

    /// Base combat value. Never negative.
    pub power: i32,

    /// Energy required to play this card. Never negative.
    pub cost: i32,

    /// On-play effects.
    pub effects: EffectSet,
}

impl CardDefinition {
    /// Create a new card definition with no effects.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        element: Element,
        power: i32,
        cost: i32,
    ) -> Self {
        debug_assert!(power >= 0, "card power must be non-negative");
        debug_assert!(cost >= 0, "card cost must be non-negative");
        Self {
            id,
            name: name.into(),
            element,
            power,
            cost,
            effects: EffectSet::NONE,
        }
    }

    /// Set the damage boost magnitude (builder pattern).
    #[must_use]
    pub fn with_damage_boost(mut self, amount: i32) -> Self {
        self.effects.damage_boost = amount;
        self
    }

    /// Set the heal magnitude (builder pattern).
    #[must_use]
    pub fn with_heal(mut self, amount: i32) -> Self {
        self.effects.heal = amount;
        self
    }

    /// Set the energy gain magnitude (builder pattern).
    #[must_use]
    pub fn with_energy_gain(mut self, amount: i32) -> Self {
        self.effects.energy_gain = amount;
        self
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.element)
    }
}
