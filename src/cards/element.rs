//! Elements and the restraint relation between them.
//!
//! Every card carries an element. Three of the four elements form a
//! dominance cycle (Yin beats Dark, Dark beats Light, Light beats Yin);
//! Blank sits outside the cycle and neither beats nor is beaten by
//! anything. During resolution the dominated side's combat value is
//! halved - see [`crate::battle`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A card's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Yin,
    Dark,
    Light,
    Blank,
}

impl Element {
    /// All elements, in declaration order.
    pub const ALL: [Element; 4] = [Element::Yin, Element::Dark, Element::Light, Element::Blank];

    /// The element this one defeats, if any.
    ///
    /// `Blank` defeats nothing.
    #[must_use]
    pub const fn defeats(self) -> Option<Element> {
        match self {
            Element::Yin => Some(Element::Dark),
            Element::Dark => Some(Element::Light),
            Element::Light => Some(Element::Yin),
            Element::Blank => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Yin => "Yin",
            Element::Dark => "Dark",
            Element::Light => "Light",
            Element::Blank => "Blank",
        };
        write!(f, "{name}")
    }
}

/// Compare two elements under the restraint relation.
///
/// Returns `Greater` if `a` defeats `b`, `Less` if `b` defeats `a`,
/// and `Equal` when neither dominates (same element, or `Blank` on
/// either side).
///
/// The relation is antisymmetric: swapping the arguments reverses
/// the ordering.
#[must_use]
pub fn compare_restraint(a: Element, b: Element) -> Ordering {
    if a.defeats() == Some(b) {
        Ordering::Greater
    } else if b.defeats() == Some(a) {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
