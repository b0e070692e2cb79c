//! Match controller: turn sequencing, outcome application, win check.
//!
//! A turn walks the phases `TurnStart -> AwaitingChoice -> Resolving ->
//! TurnEnd` and loops until a terminal health condition. The machine is
//! fully synchronous with a single suspension point: `AwaitingChoice`
//! waits for the presentation layer to call [`Duel::play_card`] or
//! [`Duel::skip_turn`]. Everything else - the opponent's move,
//! resolution, effect application, the win check, and the next turn's
//! regeneration and draws - happens inside that call before it returns.
//!
//! Pacing (delays between the opponent's move and the next turn) is a
//! presentation concern; the engine holds no timers.

use serde::{Deserialize, Serialize};

use crate::battle::resolve;
use crate::cards::CardDefinition;
use crate::combatant::Combatant;
use crate::core::{DuelConfig, DuelRng};
use crate::error::{DuelError, Result};
use crate::policy::{Decision, DecisionSource, RandomAffordable};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Turn state machine phases.
///
/// Externally a duel is only ever observed in `AwaitingChoice` or
/// `Over`; the other phases are passed through synchronously while an
/// action resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Energy regeneration and the per-turn draw.
    TurnStart,
    /// Suspended, waiting for the player's card index or skip.
    AwaitingChoice,
    /// Opponent decision and combat resolution.
    Resolving,
    /// Terminal condition check.
    TurnEnd,
    /// A side has won; the match is frozen.
    Over,
}

/// How a resolved turn came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The player's final value was strictly higher; the opponent lost
    /// `margin` health.
    PlayerWon { margin: i32 },
    /// The opponent's final value was strictly higher; the player lost
    /// `margin` health.
    OpponentWon { margin: i32 },
    /// Equal final values; no damage either way.
    Draw,
    /// The opponent had no affordable card and paid the forfeit
    /// penalty. The player's card still resolved its effects.
    OpponentForfeited { penalty: i32 },
    /// The player skipped and the opponent's card hit for its raw
    /// power, unopposed.
    PlayerSkipped { damage: i32 },
    /// The player skipped and the opponent had nothing affordable
    /// either; nothing happened.
    BothPassed,
}

/// A card effect that changed a combatant's state this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Heal,
    EnergyGain,
}

/// Record of one applied card effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEffect {
    /// Whose card carried the effect (effects always apply to the
    /// playing side's own state).
    pub side: Side,
    pub kind: EffectKind,
    pub amount: i32,
}

/// Structured record of one resolved turn.
///
/// Returned from [`Duel::play_card`] / [`Duel::skip_turn`] and kept in
/// the duel's history for callers to render or dump.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The turn this report belongs to (1-based).
    pub turn: u32,
    /// The player's played card, if any.
    pub player_card: Option<CardDefinition>,
    /// The opponent's played card, if any.
    pub opponent_card: Option<CardDefinition>,
    /// Final combat values when both sides played.
    pub player_value: Option<i32>,
    pub opponent_value: Option<i32>,
    /// Net health change this turn (damage and heals combined).
    pub player_health_delta: i32,
    pub opponent_health_delta: i32,
    /// Card effects that were applied.
    pub effects: Vec<AppliedEffect>,
    pub outcome: RoundOutcome,
}

/// Snapshot of the observable match state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelStatus {
    pub player_health: i32,
    pub player_energy: i32,
    pub opponent_health: i32,
    pub opponent_energy: i32,
    pub turn: u32,
    pub is_over: bool,
    pub winner: Option<Side>,
}

/// Builder for a [`Duel`].
///
/// ## Example
///
/// ```
/// use duel_core::cards::balanced_set;
/// use duel_core::core::DuelConfig;
/// use duel_core::duel::DuelBuilder;
///
/// let duel = DuelBuilder::new(balanced_set(), balanced_set())
///     .config(DuelConfig::default().with_forfeit_penalty(5))
///     .build(42);
///
/// assert_eq!(duel.status().turn, 1);
/// ```
pub struct DuelBuilder {
    player_cards: Vec<CardDefinition>,
    opponent_cards: Vec<CardDefinition>,
    config: DuelConfig,
    opponent_policy: Option<Box<dyn DecisionSource>>,
}

impl DuelBuilder {
    /// Start a builder from the two starting card lists.
    #[must_use]
    pub fn new(player_cards: Vec<CardDefinition>, opponent_cards: Vec<CardDefinition>) -> Self {
        Self {
            player_cards,
            opponent_cards,
            config: DuelConfig::default(),
            opponent_policy: None,
        }
    }

    /// Override the default configuration.
    #[must_use]
    pub fn config(mut self, config: DuelConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a custom opponent decision source. Defaults to
    /// [`RandomAffordable`] on a stream derived from the match seed.
    #[must_use]
    pub fn opponent_policy(mut self, policy: Box<dyn DecisionSource>) -> Self {
        self.opponent_policy = Some(policy);
        self
    }

    /// Build the duel: shuffle both decks, deal the opening hands, and
    /// run the first turn's regeneration and draw.
    #[must_use]
    pub fn build(self, seed: u64) -> Duel {
        let rng = DuelRng::new(seed);
        let config = self.config;

        let mut player = Combatant::new(
            "Player",
            self.player_cards,
            rng.for_context("player-deck"),
            &config,
        );
        let mut opponent = Combatant::new(
            "Opponent",
            self.opponent_cards,
            rng.for_context("opponent-deck"),
            &config,
        );

        player.draw(config.starting_hand_size);
        opponent.draw(config.starting_hand_size);

        let opponent_policy = self.opponent_policy.unwrap_or_else(|| {
            Box::new(RandomAffordable::new(rng.for_context("opponent-policy")))
        });

        let mut duel = Duel {
            player,
            opponent,
            opponent_policy,
            config,
            phase: Phase::TurnStart,
            turn: 0,
            winner: None,
            history: Vec::new(),
        };
        duel.begin_turn();
        duel
    }
}

/// A running match between the player and the scripted opponent.
#[derive(Debug)]
pub struct Duel {
    player: Combatant,
    opponent: Combatant,
    opponent_policy: Box<dyn DecisionSource>,
    config: DuelConfig,
    phase: Phase,
    turn: u32,
    winner: Option<Side>,
    history: Vec<TurnReport>,
}

impl Duel {
    /// Create a duel with the default configuration and opponent
    /// policy. See [`DuelBuilder`] for customization.
    #[must_use]
    pub fn new(
        player_cards: Vec<CardDefinition>,
        opponent_cards: Vec<CardDefinition>,
        seed: u64,
    ) -> Self {
        DuelBuilder::new(player_cards, opponent_cards).build(seed)
    }

    /// The player's current hand, in order, for rendering.
    #[must_use]
    pub fn hand(&self) -> &[CardDefinition] {
        self.player.hand()
    }

    /// Whether the card at `index` exists and is affordable right now.
    #[must_use]
    pub fn is_card_playable(&self, index: usize) -> bool {
        !self.is_over()
            && self
                .player
                .hand()
                .get(index)
                .is_some_and(|card| card.cost <= self.player.energy())
    }

    /// Play the player's card at `index` and run the turn to
    /// completion.
    ///
    /// Fails with `InvalidIndex` or `InsufficientEnergy` without
    /// changing any state, and with `MatchAlreadyOver` once a winner
    /// exists.
    pub fn play_card(&mut self, index: usize) -> Result<TurnReport> {
        if self.is_over() {
            return Err(DuelError::MatchAlreadyOver);
        }
        let card = self.player.play_card(index)?;
        Ok(self.resolve_round(Some(card)))
    }

    /// Skip the player's turn: no card, no effects. The opponent still
    /// acts, and an unopposed opponent card hits for its raw power.
    pub fn skip_turn(&mut self) -> Result<TurnReport> {
        if self.is_over() {
            return Err(DuelError::MatchAlreadyOver);
        }
        Ok(self.resolve_round(None))
    }

    /// Observable match state.
    #[must_use]
    pub fn status(&self) -> DuelStatus {
        DuelStatus {
            player_health: self.player.health(),
            player_energy: self.player.energy(),
            opponent_health: self.opponent.health(),
            opponent_energy: self.opponent.energy(),
            turn: self.turn,
            is_over: self.is_over(),
            winner: self.winner,
        }
    }

    /// Current phase; `AwaitingChoice` or `Over` between calls.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn number (1-based).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True once a side has won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning side, if the match has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The player-side combatant.
    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// The opponent-side combatant.
    #[must_use]
    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// Reports for every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// Run `TurnStart`: regenerate both sides once, then one draw each.
    fn begin_turn(&mut self) {
        self.phase = Phase::TurnStart;
        self.turn += 1;

        self.player.start_turn();
        self.opponent.start_turn();

        self.player.draw_one();
        self.opponent.draw_one();

        self.phase = Phase::AwaitingChoice;
    }

    /// Run `Resolving` and `TurnEnd` for the player's chosen action.
    ///
    /// `player_card` has already been removed from the player's hand
    /// and paid for; `None` means the player skipped.
    fn resolve_round(&mut self, player_card: Option<CardDefinition>) -> TurnReport {
        self.phase = Phase::Resolving;

        let player_health_before = self.player.health();
        let opponent_health_before = self.opponent.health();
        let mut effects = Vec::new();

        let opponent_card = match self
            .opponent_policy
            .choose(self.opponent.hand(), self.opponent.energy())
        {
            Decision::Play(index) => self.opponent.play_card(index).ok(),
            // A deferred decision from the scripted side counts as a
            // forfeit; there is nobody to defer to.
            Decision::Forfeit | Decision::Deferred => None,
        };

        if let Some(card) = &player_card {
            Self::apply_card_effects(&mut self.player, card, Side::Player, &mut effects);
        }
        if let Some(card) = &opponent_card {
            Self::apply_card_effects(&mut self.opponent, card, Side::Opponent, &mut effects);
        }

        let (player_value, opponent_value, outcome) = match (&player_card, &opponent_card) {
            (Some(pc), Some(oc)) => {
                let res = resolve(pc, oc);
                let outcome = if res.damage_to_opponent() > 0 {
                    self.opponent.take_damage(res.damage_to_opponent());
                    RoundOutcome::PlayerWon {
                        margin: res.damage_to_opponent(),
                    }
                } else if res.damage_to_player() > 0 {
                    self.player.take_damage(res.damage_to_player());
                    RoundOutcome::OpponentWon {
                        margin: res.damage_to_player(),
                    }
                } else {
                    RoundOutcome::Draw
                };
                (Some(res.player_value), Some(res.opponent_value), outcome)
            }
            (Some(_), None) => {
                let penalty = self.config.forfeit_penalty;
                self.opponent.take_damage(penalty);
                (None, None, RoundOutcome::OpponentForfeited { penalty })
            }
            (None, Some(oc)) => {
                // Unopposed: raw power, no restraint, no boost.
                let damage = oc.power;
                self.player.take_damage(damage);
                (None, None, RoundOutcome::PlayerSkipped { damage })
            }
            (None, None) => (None, None, RoundOutcome::BothPassed),
        };

        let report = TurnReport {
            turn: self.turn,
            player_card,
            opponent_card,
            player_value,
            opponent_value,
            player_health_delta: self.player.health() - player_health_before,
            opponent_health_delta: self.opponent.health() - opponent_health_before,
            effects,
            outcome,
        };
        self.history.push(report.clone());

        self.end_turn();
        report
    }

    /// Run `TurnEnd`: terminal check, then either freeze or loop.
    ///
    /// The opponent's health is checked first, so the player wins a
    /// simultaneous knockout.
    fn end_turn(&mut self) {
        self.phase = Phase::TurnEnd;

        if self.opponent.is_defeated() {
            self.winner = Some(Side::Player);
        } else if self.player.is_defeated() {
            self.winner = Some(Side::Opponent);
        }

        if self.winner.is_some() {
            self.phase = Phase::Over;
        } else {
            self.begin_turn();
        }
    }

    /// Apply a played card's unconditional effects to its own side.
    fn apply_card_effects(
        combatant: &mut Combatant,
        card: &CardDefinition,
        side: Side,
        effects: &mut Vec<AppliedEffect>,
    ) {
        if card.effects.heal > 0 {
            combatant.heal(card.effects.heal);
            effects.push(AppliedEffect {
                side,
                kind: EffectKind::Heal,
                amount: card.effects.heal,
            });
        }
        if card.effects.energy_gain > 0 {
            combatant.gain_energy(card.effects.energy_gain);
            effects.push(AppliedEffect {
                side,
                kind: EffectKind::EnergyGain,
                amount: card.effects.energy_gain,
            });
        }
    }
}
