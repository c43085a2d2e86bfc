//! Euchre rules engine tailored for reinforcement-learning workloads and bot
//! experimentation.
//!
//! The engine is a strict, replayable state machine. Agents consult
//! [`Game::legal_actions`], act through [`Game::apply_action`], and observe
//! through [`Game::state_view`]; illegal actions fail loudly instead of
//! corrupting the deterministic replay guarantee. Actions cross the process
//! boundary as stable integers (see [`action`]) so a learning agent can
//! address the space directly.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ordering;
pub mod replay;
pub mod state;
pub mod trick;
pub mod visualize;

pub use crate::action::{
    ACTION_ORDER_UP, ACTION_ORDER_UP_ALONE, ACTION_PASS, Action, NUM_ACTIONS, PlayerId, TeamId,
    all_actions, card_from_action, is_going_alone,
};
pub use crate::bot::Bot;
pub use crate::bots::{HeuristicBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::card::{Card, CardSet, Rank, Suit, standard_deck};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::hand::Hand;
pub use crate::replay::Replay;
pub use crate::state::{
    DEFAULT_WINNING_SCORE, GameSettings, GameStateView, GameStatus, HandPhase, TrickView,
    next_seat, partner_of, team_of,
};
pub use crate::trick::Trick;
pub use crate::visualize::{describe_action, render_state};
