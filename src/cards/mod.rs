//! Card system: elements, definitions, and the catalog.

mod catalog;
mod definition;
mod element;

pub use catalog::{balanced_set, random_deck, Catalog, STARTER_DECK_SIZE};
pub use definition::{CardDefinition, CardId, EffectSet};
pub use element::{compare_restraint, Element};
