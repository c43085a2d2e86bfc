//! Deterministic match replay.
//!
//! A match is fully determined by its seed, rule settings, optional injected
//! deck, and the sequence of applied action ids, so a compact log rebuilds
//! the exact same state. This is the replay guarantee RL training relies on.

use bincode::error::{DecodeError, EncodeError};
use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::Card;
use crate::error::GameError;
use crate::game::{Game, GameBuilder};
use crate::state::GameSettings;

/// Compact record of one match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replay {
    pub seed: u64,
    pub settings: GameSettings,
    /// Present when the match was played with an injected deck.
    pub deck: Option<Vec<Card>>,
    /// Present when the match was played with a pinned first dealer.
    pub dealer: Option<PlayerId>,
    /// Applied action ids, in order.
    pub actions: Vec<u16>,
}

impl Replay {
    /// Captures everything needed to rebuild `game` from scratch.
    pub fn from_game(game: &Game) -> Replay {
        Replay {
            seed: game.seed(),
            settings: game.settings(),
            deck: game.deck_override().map(<[Card]>::to_vec),
            dealer: game.dealer_override(),
            actions: game.action_log().iter().map(|(_, id)| *id).collect(),
        }
    }

    /// Rebuilds the match by replaying every recorded action.
    pub fn run(&self) -> Result<Game, GameError> {
        let mut builder = GameBuilder::new()
            .with_seed(self.seed)
            .with_stick_the_dealer(self.settings.stick_the_dealer)
            .with_winning_score(self.settings.winning_score);
        if let Some(deck) = &self.deck {
            builder = builder.with_deck(deck.clone());
        }
        if let Some(dealer) = self.dealer {
            builder = builder.with_dealer(dealer);
        }

        let mut game = builder.build()?;
        for &id in &self.actions {
            let player = game.current_player();
            game.apply_action_id(player, id)?;
        }
        Ok(game)
    }

    /// Serializes to a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
    }

    /// Deserializes a blob produced by [`Replay::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Replay, DecodeError> {
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map(|(replay, _)| replay)
    }
}
