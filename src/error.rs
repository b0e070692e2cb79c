//! Error types for the duel engine.
//!
//! Every failure is local and recoverable: a rejected operation leaves
//! engine state exactly as it was. Note that a short draw from an
//! exhausted deck is NOT an error - callers receive fewer cards and
//! carry on.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelError {
    /// Card index outside the hand. A UI bug; state is untouched.
    #[error("card index {0} is outside the hand")]
    InvalidIndex(usize),

    /// The selected card costs more energy than is available. A UI
    /// should pre-filter with `is_card_playable`; the engine rejects
    /// it anyway without mutating hand or energy.
    #[error("insufficient energy for card at index {index}: cost {cost}, energy {energy}")]
    InsufficientEnergy {
        index: usize,
        cost: i32,
        energy: i32,
    },

    /// An action was requested after the match reached a terminal
    /// state. The match is frozen.
    #[error("the match is already over")]
    MatchAlreadyOver,
}

pub type Result<T> = std::result::Result<T, DuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            DuelError::InvalidIndex(7).to_string(),
            "card index 7 is outside the hand"
        );
        assert_eq!(
            DuelError::InsufficientEnergy {
                index: 0,
                cost: 4,
                energy: 2
            }
            .to_string(),
            "insufficient energy for card at index 0: cost 4, energy 2"
        );
        assert_eq!(
            DuelError::MatchAlreadyOver.to_string(),
            "the match is already over"
        );
    }
}
