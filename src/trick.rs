use crate::action::PlayerId;
use crate::card::{Card, Suit};
use crate::error::{GameError, InvalidAction};
use crate::ordering::winning_play;

/// One round of play: every active seat contributes a single card.
#[derive(Clone, Debug)]
pub struct Trick {
    trump: Suit,
    expected_plays: usize,
    plays: Vec<(Card, PlayerId)>,
    winner: Option<(Card, PlayerId)>,
}

impl Trick {
    pub fn new(trump: Suit, expected_plays: usize) -> Trick {
        Trick {
            trump,
            expected_plays,
            plays: Vec::with_capacity(expected_plays),
            winner: None,
        }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// The first card played, which sets the suit to follow.
    pub fn led(&self) -> Option<Card> {
        self.plays.first().map(|(card, _)| *card)
    }

    pub fn plays(&self) -> &[(Card, PlayerId)] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.expected_plays
    }

    /// Records a play. Legal only while the trick is open.
    pub fn play(&mut self, card: Card, player: PlayerId) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(InvalidAction::TrickComplete.into());
        }
        self.plays.push((card, player));
        Ok(())
    }

    /// Resolves the winner once every expected play is in.
    pub fn resolve(&mut self) -> Result<PlayerId, GameError> {
        if !self.is_complete() {
            return Err(InvalidAction::TrickIncomplete.into());
        }
        let best = winning_play(&self.plays, self.trump).ok_or(InvalidAction::TrickIncomplete)?;
        self.winner = Some(best);
        Ok(best.1)
    }

    pub fn winning_card(&self) -> Option<Card> {
        self.winner.map(|(card, _)| card)
    }

    pub fn winning_player(&self) -> Option<PlayerId> {
        self.winner.map(|(_, player)| player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn resolves_to_the_best_card_once_full() {
        let mut trick = Trick::new(Suit::Diamonds, 4);
        trick.play(Card::new(Suit::Diamonds, Rank::Nine), 2).expect("open");
        trick.play(Card::new(Suit::Hearts, Rank::Jack), 3).expect("open");
        trick.play(Card::new(Suit::Diamonds, Rank::Ace), 0).expect("open");

        assert!(matches!(
            trick.resolve(),
            Err(GameError::InvalidAction(InvalidAction::TrickIncomplete))
        ));

        trick.play(Card::new(Suit::Diamonds, Rank::Jack), 1).expect("open");
        assert!(trick.is_complete());
        assert_eq!(trick.resolve().expect("complete"), 1);
        assert_eq!(trick.winning_card(), Some(Card::new(Suit::Diamonds, Rank::Jack)));
        assert_eq!(trick.winning_player(), Some(1));
    }

    #[test]
    fn rejects_plays_once_full() {
        let mut trick = Trick::new(Suit::Clubs, 3);
        trick.play(Card::new(Suit::Clubs, Rank::Ace), 0).expect("open");
        trick.play(Card::new(Suit::Clubs, Rank::King), 1).expect("open");
        trick.play(Card::new(Suit::Clubs, Rank::Queen), 3).expect("open");

        assert!(matches!(
            trick.play(Card::new(Suit::Clubs, Rank::Ten), 0),
            Err(GameError::InvalidAction(InvalidAction::TrickComplete))
        ));
    }
}
