//! Combat resolution: restraint lookup and final value computation.
//!
//! Resolution is a pure function of the two played cards. The dominated
//! side's power is halved with integer floor division, then each side
//! adds its own damage boost. Applying the resulting damage, heals, and
//! energy gains is the match controller's job, not the resolver's.

use std::cmp::Ordering;

use crate::cards::{compare_restraint, CardDefinition};

/// Outcome of comparing two played cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The player's final combat value.
    pub player_value: i32,
    /// The opponent's final combat value.
    pub opponent_value: i32,
    /// Restraint direction: `Greater` if the player's element dominates,
    /// `Less` if the opponent's does, `Equal` for no restraint.
    pub restraint: Ordering,
}

impl Resolution {
    /// Damage dealt to the opponent, zero unless the player's value is
    /// strictly higher.
    #[must_use]
    pub fn damage_to_opponent(&self) -> i32 {
        (self.player_value - self.opponent_value).max(0)
    }

    /// Damage dealt to the player, zero unless the opponent's value is
    /// strictly higher.
    #[must_use]
    pub fn damage_to_player(&self) -> i32 {
        (self.opponent_value - self.player_value).max(0)
    }

    /// True when both final values are equal: nobody takes damage.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.player_value == self.opponent_value
    }
}

/// Resolve a clash between the player's and the opponent's played cards.
///
/// ```
/// use duel_core::battle::resolve;
/// use duel_core::cards::{CardDefinition, CardId, Element};
///
/// let spear = CardDefinition::new(CardId::new(0), "Light Spear", Element::Light, 7, 4);
/// let claw = CardDefinition::new(CardId::new(1), "Yin Claw", Element::Yin, 8, 3);
///
/// // Light beats Yin: the claw's 8 is floored to 4.
/// let res = resolve(&spear, &claw);
/// assert_eq!((res.player_value, res.opponent_value), (7, 4));
/// assert_eq!(res.damage_to_opponent(), 3);
/// ```
#[must_use]
pub fn resolve(player_card: &CardDefinition, opponent_card: &CardDefinition) -> Resolution {
    let restraint = compare_restraint(player_card.element, opponent_card.element);

    let mut player_value = player_card.power;
    let mut opponent_value = opponent_card.power;

    // Floor division, deliberately: 7 halves to 3.
    match restraint {
        Ordering::Greater => opponent_value /= 2,
        Ordering::Less => player_value /= 2,
        Ordering::Equal => {}
    }

    player_value += player_card.effects.damage_boost;
    opponent_value += opponent_card.effects.damage_boost;

    Resolution {
        player_value,
        opponent_value,
        restraint,
    }
}
