use serde::{Deserialize, Serialize};

use crate::action::{PlayerId, TeamId};
use crate::card::{Card, NUM_PLAYERS, NUM_TEAMS, Suit};
use crate::error::GameError;

/// Seat to the left of `player`; turn order runs clockwise.
#[inline]
pub fn next_seat(player: PlayerId) -> PlayerId {
    (player + 1) % NUM_PLAYERS
}

/// Seat across the table; seats two apart are partners.
#[inline]
pub fn partner_of(player: PlayerId) -> PlayerId {
    (player + 2) % NUM_PLAYERS
}

/// Team of a seat: even seats against odd seats.
#[inline]
pub fn team_of(player: PlayerId) -> TeamId {
    player % 2
}

pub const DEFAULT_WINNING_SCORE: u8 = 10;

/// Rule options decided once at match start.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    /// Forbid the dealer from passing in the second bidding round.
    pub stick_the_dealer: bool,
    /// Score a team must reach to win the match.
    pub winning_score: u8,
}

impl GameSettings {
    pub fn new(stick_the_dealer: bool, winning_score: u8) -> Result<GameSettings, GameError> {
        if winning_score == 0 {
            return Err(GameError::InvalidConfiguration(
                "winning score must be positive",
            ));
        }
        Ok(GameSettings {
            stick_the_dealer,
            winning_score,
        })
    }
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            stick_the_dealer: false,
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

/// Phase of the hand currently being played.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandPhase {
    /// First bidding round on the turned-up candidate.
    BiddingCandidate,
    /// Second bidding round after the candidate was turned down.
    BiddingSuit,
    /// Dealer exchanges a card for the ordered-up candidate.
    DealerDiscard,
    /// Trick play.
    Playing,
    /// All five tricks resolved, or the hand was thrown in.
    Done,
}

/// Status of the entire match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: TeamId },
}

/// Public snapshot of one trick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TrickView {
    pub plays: Vec<(Card, PlayerId)>,
    pub winner: Option<PlayerId>,
}

/// Game state snapshot tailored for bots and ML agents. Contains only what
/// the observing seat may know: its own cards plus public information.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub phase: HandPhase,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub dealer: PlayerId,
    pub trump_candidate: Card,
    pub trump_suit: Option<Suit>,
    pub maker: Option<PlayerId>,
    pub maker_alone: bool,
    /// The observing seat's cards, sorted by identity.
    pub hand: Vec<Card>,
    pub current_trick: TrickView,
    pub tricks_completed: u8,
    pub team_tricks: [u8; NUM_TEAMS],
    pub scores: [u8; NUM_TEAMS],
    pub sets: [u8; NUM_TEAMS],
    /// Every card exposed so far this hand (candidate and plays), in order,
    /// for card counting.
    pub publicly_known_cards: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_helpers_wrap_the_table() {
        assert_eq!(next_seat(3), 0);
        assert_eq!(partner_of(1), 3);
        assert_eq!(partner_of(3), 1);
        assert_eq!(team_of(0), team_of(2));
        assert_eq!(team_of(1), team_of(3));
        assert_ne!(team_of(0), team_of(1));
    }

    #[test]
    fn settings_reject_a_zero_target() {
        assert!(GameSettings::new(true, 0).is_err());
        let settings = GameSettings::default();
        assert_eq!(settings.winning_score, DEFAULT_WINNING_SCORE);
        assert!(!settings.stick_the_dealer);
    }
}
