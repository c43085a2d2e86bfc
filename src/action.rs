//! The integer action space shared with learning agents.
//!
//! Agents address the engine through stable action identifiers partitioned
//! by fixed offsets:
//!
//! | id            | meaning                              |
//! |---------------|--------------------------------------|
//! | 0             | pass                                 |
//! | 1 / 11        | order up the candidate / alone       |
//! | 100+s / 110+s | call suit `s` as trump / alone       |
//! | 200 + card id | dealer discard of the given card     |
//! | 300 + card id | play the given card                  |
//!
//! Inside the crate actions travel as the [`Action`] enum; the arithmetic
//! lives only in [`Action::encode`] and [`Action::decode`], which form an
//! exact bijection over the 59 valid identifiers and fail loudly everywhere
//! else.

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Suit, standard_deck};
use crate::error::GameError;

/// Zero-based seat index within the game.
pub type PlayerId = usize;

/// Zero-based team index; seats 0/2 face seats 1/3.
pub type TeamId = usize;

const ALONE_SHIFT: u16 = 10;
const CALL_SUIT_SHIFT: u16 = 100;
const DISCARD_SHIFT: u16 = 200;
const PLAY_SHIFT: u16 = 300;

pub const ACTION_PASS: u16 = 0;
pub const ACTION_ORDER_UP: u16 = 1;
pub const ACTION_ORDER_UP_ALONE: u16 = ACTION_ORDER_UP + ALONE_SHIFT;

/// Size of the action space: pass, order-up and four callable suits (each
/// with an alone form), plus a discard and a play per deck card.
pub const NUM_ACTIONS: usize = 3 + 2 * 4 + 2 * DECK_SIZE;

/// Action available to an agent, decoded from the integer space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Decline to order trump during either bidding round.
    Pass,
    /// Accept the turned-up candidate's suit as trump.
    OrderUp { alone: bool },
    /// Name a suit as trump in the second bidding round.
    CallSuit { suit: Suit, alone: bool },
    /// Dealer exchange: discard a card after picking up the candidate.
    Discard(Card),
    /// Play a card into the current trick.
    Play(Card),
}

impl Action {
    /// Encode into the stable integer contract.
    pub fn encode(self) -> u16 {
        match self {
            Action::Pass => ACTION_PASS,
            Action::OrderUp { alone } => ACTION_ORDER_UP + if alone { ALONE_SHIFT } else { 0 },
            Action::CallSuit { suit, alone } => {
                CALL_SUIT_SHIFT + suit as u16 + if alone { ALONE_SHIFT } else { 0 }
            }
            Action::Discard(card) => DISCARD_SHIFT + u16::from(card.id()),
            Action::Play(card) => PLAY_SHIFT + u16::from(card.id()),
        }
    }

    /// Decode an integer action identifier. Fails loudly outside the valid
    /// identifiers instead of decoding to a wrong action.
    pub fn decode(id: u16) -> Result<Action, GameError> {
        match id {
            ACTION_PASS => Ok(Action::Pass),
            ACTION_ORDER_UP => Ok(Action::OrderUp { alone: false }),
            ACTION_ORDER_UP_ALONE => Ok(Action::OrderUp { alone: true }),
            100..=113 => {
                let relative = (id - CALL_SUIT_SHIFT) as u8;
                match Suit::from_index(relative % 10) {
                    Some(suit) => Ok(Action::CallSuit {
                        suit,
                        alone: relative / 10 == 1,
                    }),
                    None => Err(GameError::UnknownAction(id)),
                }
            }
            200..=299 => Ok(Action::Discard(Card::from_id((id - DISCARD_SHIFT) as u8)?)),
            300..=399 => Ok(Action::Play(Card::from_id((id - PLAY_SHIFT) as u8)?)),
            _ => Err(GameError::UnknownAction(id)),
        }
    }

    /// The card referenced by a discard or play action.
    pub fn card(self) -> Option<Card> {
        match self {
            Action::Discard(card) | Action::Play(card) => Some(card),
            _ => None,
        }
    }

    /// Whether this action commits the bidder to playing alone.
    pub fn is_alone(self) -> bool {
        matches!(
            self,
            Action::OrderUp { alone: true } | Action::CallSuit { alone: true, .. }
        )
    }
}

/// Registry lookup over the raw integer surface: an action's card is the
/// identity given by the action id modulo 100.
pub fn card_from_action(id: u16) -> Result<Card, GameError> {
    Card::from_id((id % 100) as u8)
}

/// The tens digit of an in-range action id marks a going-alone bid.
pub fn is_going_alone(id: u16) -> bool {
    (id % 100) / 10 == 1
}

/// Every valid action in canonical order: bidding, suit calls, suit calls
/// alone, discards, plays.
pub fn all_actions() -> Vec<Action> {
    let mut actions = vec![
        Action::Pass,
        Action::OrderUp { alone: false },
        Action::OrderUp { alone: true },
    ];
    for suit in Suit::ALL {
        actions.push(Action::CallSuit { suit, alone: false });
    }
    for suit in Suit::ALL {
        actions.push(Action::CallSuit { suit, alone: true });
    }
    for card in standard_deck() {
        actions.push(Action::Discard(card));
    }
    for card in standard_deck() {
        actions.push(Action::Play(card));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn encode_decode_is_a_bijection() {
        let actions = all_actions();
        assert_eq!(actions.len(), NUM_ACTIONS);

        let mut seen = std::collections::HashSet::new();
        for action in actions {
            let id = action.encode();
            assert!(seen.insert(id), "duplicate id {id}");
            assert_eq!(Action::decode(id).expect("valid id"), action);
        }
    }

    #[test]
    fn known_identifiers_match_the_contract() {
        assert_eq!(Action::Pass.encode(), 0);
        assert_eq!(Action::OrderUp { alone: false }.encode(), 1);
        assert_eq!(Action::OrderUp { alone: true }.encode(), 11);
        assert_eq!(
            Action::CallSuit { suit: Suit::Clubs, alone: false }.encode(),
            100
        );
        assert_eq!(
            Action::CallSuit { suit: Suit::Hearts, alone: true }.encode(),
            112
        );
        assert_eq!(
            Action::Discard(Card::new(Suit::Clubs, Rank::Ace)).encode(),
            201
        );
        assert_eq!(
            Action::Play(Card::new(Suit::Spades, Rank::Nine)).encode(),
            336
        );
    }

    #[test]
    fn decoding_outside_the_space_fails() {
        for id in [2u16, 12, 37, 42, 99, 114, 150, 400, 1000, u16::MAX] {
            assert!(matches!(
                Action::decode(id),
                Err(GameError::UnknownAction(bad)) if bad == id
            ));
        }
        // Suit digits above three are dead space inside the call range.
        for id in [104u16, 105, 108, 109] {
            assert!(matches!(
                Action::decode(id),
                Err(GameError::UnknownAction(bad)) if bad == id
            ));
        }
        // Card identities absent from the registry fail as unknown cards.
        for id in [200u16, 207, 210, 237, 299, 300, 317, 399] {
            assert!(matches!(
                Action::decode(id),
                Err(GameError::UnknownCard(_))
            ));
        }
    }

    #[test]
    fn arithmetic_helpers_reproduce_the_contract() {
        let j_h = Card::new(Suit::Hearts, Rank::Jack);
        assert_eq!(card_from_action(Action::Play(j_h).encode()).expect("card"), j_h);
        assert_eq!(
            card_from_action(Action::Discard(j_h).encode()).expect("card"),
            j_h
        );
        assert!(card_from_action(ACTION_PASS).is_err());

        assert!(is_going_alone(ACTION_ORDER_UP_ALONE));
        assert!(is_going_alone(112));
        assert!(!is_going_alone(ACTION_ORDER_UP));
        assert!(!is_going_alone(103));
    }
}
