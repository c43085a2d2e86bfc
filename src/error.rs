use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("no card has identity {0}")]
    UnknownCard(u8),
    #[error("action identifier {0} is outside the action space")]
    UnknownAction(u16),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of invalid user actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("action does not belong to the current phase")]
    WrongPhase,
    #[error("card is not in the player's hand")]
    CardNotInHand,
    #[error("a card following the led suit must be played")]
    MustFollowSuit,
    #[error("the turned-down suit cannot be named as trump")]
    TurnedDownSuit,
    #[error("the dealer must name a suit when playing stick the dealer")]
    DealerMustCall,
    #[error("trick already has every expected play")]
    TrickComplete,
    #[error("trick is missing plays and cannot be resolved")]
    TrickIncomplete,
}
