use std::cmp::Ordering;

use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Suit};
use crate::ordering::{trick_order, trump_strength, winning_play};
use crate::state::{GameStateView, partner_of};

/// Rule-based bot that plays passable euchre without search or learning.
///
/// In plain English:
/// - Bid when holding three or more would-be trump cards (bowers included);
///   go alone only with four or more.
/// - As dealer, discard the weakest card that is not trump.
/// - Lead the strongest card; otherwise take the trick as cheaply as
///   possible, shed the weakest legal card when the trick is lost, and never
///   climb over a partner who is already winning.
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    fn trump_count(hand: &[Card], trump: Suit) -> i32 {
        hand.iter().filter(|card| card.is_trump(trump)).count() as i32
    }

    /// Rough keep-value of a card: any trump above any plain card, stronger
    /// ranks first.
    fn card_value(card: Card, trump: Option<Suit>) -> i32 {
        match trump {
            Some(trump) if card.is_trump(trump) => 10 + i32::from(trump_strength(card, trump)),
            _ => i32::from(6 - card.rank as u8),
        }
    }

    /// Bids beat passing (score zero) only from three trumps up; going alone
    /// needs a fourth.
    fn score_bid(state: &GameStateView, trump: Suit, alone: bool) -> i32 {
        let count = Self::trump_count(&state.hand, trump);
        let base = 120 * count - 300;
        if alone {
            if count >= 4 { base + 50 } else { base - 500 }
        } else {
            base
        }
    }

    fn score_play(state: &GameStateView, card: Card) -> i32 {
        let Some(trump) = state.trump_suit else {
            return 0;
        };
        let value = Self::card_value(card, Some(trump));
        let plays = &state.current_trick.plays;
        let Some(&(led, _)) = plays.first() else {
            // Leading: put the strongest card out.
            return 200 + value;
        };
        let Some((best_card, best_player)) = winning_play(plays, trump) else {
            return 200 + value;
        };

        if best_player == partner_of(state.self_player) {
            return 400 - value;
        }
        if trick_order(card, best_card, led, trump) == Ordering::Greater {
            600 - value
        } else {
            300 - value
        }
    }

    fn score_action(state: &GameStateView, action: &Action) -> i32 {
        match *action {
            Action::Pass => 0,
            Action::OrderUp { alone } => Self::score_bid(state, state.trump_candidate.suit, alone),
            Action::CallSuit { suit, alone } => Self::score_bid(state, suit, alone),
            Action::Discard(card) => -Self::card_value(card, state.trump_suit),
            Action::Play(card) => Self::score_play(state, card),
        }
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for HeuristicBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        legal_actions
            .iter()
            .max_by_key(|action| Self::score_action(state, action))
            .copied()
            .expect("at least one legal action must be available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;
    use crate::game::GameBuilder;
    use crate::state::HandPhase;

    #[test]
    fn passes_on_a_trumpless_hand_and_bids_on_a_loaded_one() {
        let game = GameBuilder::new().with_seed(3).build().expect("game");
        let seat = game.current_player();
        let mut view = game.state_view(seat).expect("view");
        assert_eq!(view.phase, HandPhase::BiddingCandidate);

        let legal = vec![
            Action::Pass,
            Action::OrderUp { alone: false },
            Action::OrderUp { alone: true },
        ];
        let mut bot = HeuristicBot::new();

        let candidate = view.trump_candidate.suit;
        view.hand = vec![
            Card::new(candidate.opposite(), Rank::Ace),
            Card::new(candidate.opposite(), Rank::King),
            Card::new(candidate.opposite(), Rank::Queen),
            Card::new(candidate.opposite(), Rank::Ten),
            Card::new(candidate.opposite(), Rank::Nine),
        ];
        assert_eq!(bot.select_action(&view, &legal), Action::Pass);

        view.hand = vec![
            Card::new(candidate, Rank::Jack),
            Card::new(candidate, Rank::Ace),
            Card::new(candidate, Rank::King),
            Card::new(candidate.opposite(), Rank::Nine),
            Card::new(candidate.opposite(), Rank::Ten),
        ];
        assert_eq!(
            bot.select_action(&view, &legal),
            Action::OrderUp { alone: false }
        );

        view.hand[3] = Card::new(candidate.opposite(), Rank::Jack);
        view.hand[4] = Card::new(candidate, Rank::Queen);
        assert_eq!(
            bot.select_action(&view, &legal),
            Action::OrderUp { alone: true }
        );
    }
}
