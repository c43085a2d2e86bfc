//! One deal of euchre: bidding, the optional dealer exchange, five tricks,
//! and the hand score.

use std::array::from_fn;

use crate::action::{Action, PlayerId, TeamId};
use crate::card::{Card, CardSet, DECK_SIZE, KITTY_SIZE, NUM_PLAYERS, NUM_TEAMS, Suit, TRICKS_PER_HAND};
use crate::error::{GameError, InvalidAction};
use crate::ordering::follow_suit_cards;
use crate::state::{GameSettings, HandPhase, TrickView, next_seat, partner_of, team_of};
use crate::trick::Trick;

// Taking every trick is a march (doubled when alone); three or four tricks
// score one; a maker held under three tricks is euchred and the defense
// collects two.
const MARCH_ALONE_POINTS: u8 = 4;
const MARCH_POINTS: u8 = 2;
const SINGLE_POINTS: u8 = 1;
const EUCHRE_POINTS: u8 = 2;
const TRICKS_TO_MAKE: u8 = 3;

/// State machine for a single deal.
#[derive(Clone, Debug)]
pub struct Hand {
    settings: GameSettings,
    dealer: PlayerId,
    phase: HandPhase,
    current_player: PlayerId,
    hands: [CardSet; NUM_PLAYERS],
    kitty: Vec<Card>,
    trump_candidate: Card,
    trump_suit: Option<Suit>,
    maker: Option<PlayerId>,
    alone: bool,
    passes: u8,
    tricks: Vec<Trick>,
    current_trick: Option<Trick>,
    team_tricks: [u8; NUM_TEAMS],
    publicly_known_cards: Vec<Card>,
}

impl Hand {
    /// Deals a shuffled deck around the table and turns up the candidate.
    pub(crate) fn deal(deck: &[Card; DECK_SIZE], dealer: PlayerId, settings: GameSettings) -> Hand {
        let left = next_seat(dealer);
        let across = partner_of(dealer);
        let right = next_seat(across);

        // Two passes around the table, 3-2-3-2 then 2-3-2-3.
        let plan: [(PlayerId, [usize; 5]); NUM_PLAYERS] = [
            (left, [0, 1, 2, 10, 11]),
            (across, [3, 4, 12, 13, 14]),
            (right, [5, 6, 7, 15, 16]),
            (dealer, [8, 9, 17, 18, 19]),
        ];

        let mut hands: [CardSet; NUM_PLAYERS] = from_fn(|_| CardSet::new());
        for (seat, indices) in plan {
            for index in indices {
                hands[seat].add(deck[index]);
            }
        }

        let trump_candidate = deck[20];
        let kitty = deck[21..].to_vec();

        Hand {
            settings,
            dealer,
            phase: HandPhase::BiddingCandidate,
            current_player: left,
            hands,
            kitty,
            trump_candidate,
            trump_suit: None,
            maker: None,
            alone: false,
            passes: 0,
            tricks: Vec::with_capacity(TRICKS_PER_HAND),
            current_trick: None,
            team_tricks: [0; NUM_TEAMS],
            publicly_known_cards: vec![trump_candidate],
        }
    }

    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn trump_candidate(&self) -> Card {
        self.trump_candidate
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    /// The player who ordered trump, once bidding has resolved.
    pub fn maker(&self) -> Option<PlayerId> {
        self.maker
    }

    pub fn is_maker_alone(&self) -> bool {
        self.alone
    }

    pub fn is_done(&self) -> bool {
        self.phase == HandPhase::Done
    }

    pub fn team_tricks(&self) -> [u8; NUM_TEAMS] {
        self.team_tricks
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks.len() as u8
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Cards exposed so far this hand (candidate and plays), in order.
    pub fn publicly_known_cards(&self) -> &[Card] {
        &self.publicly_known_cards
    }

    /// The given seat's cards, sorted by identity.
    pub fn player_cards(&self, player: PlayerId) -> Result<Vec<Card>, GameError> {
        if player >= NUM_PLAYERS {
            return Err(GameError::InvalidPlayer(player));
        }
        Ok(self.hands[player].sorted())
    }

    pub fn current_trick_view(&self) -> TrickView {
        match &self.current_trick {
            Some(trick) => TrickView {
                plays: trick.plays().to_vec(),
                winner: trick.winning_player(),
            },
            None => TrickView::default(),
        }
    }

    /// The lone maker's partner sits the hand out entirely.
    fn sits_out(&self, seat: PlayerId) -> bool {
        self.alone && self.maker.map(partner_of) == Some(seat)
    }

    fn next_active_seat(&self, seat: PlayerId) -> PlayerId {
        let next = next_seat(seat);
        if self.sits_out(next) { next_seat(next) } else { next }
    }

    fn players_in_trick(&self) -> usize {
        if self.alone { NUM_PLAYERS - 1 } else { NUM_PLAYERS }
    }

    fn first_leader(&self) -> PlayerId {
        let lead = next_seat(self.dealer);
        if self.sits_out(lead) { next_seat(lead) } else { lead }
    }

    /// Legal actions for the acting player in the current phase. Empty once
    /// the hand is done; asking for a non-acting seat is an error.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if player >= NUM_PLAYERS {
            return Err(GameError::InvalidPlayer(player));
        }
        if self.phase == HandPhase::Done {
            return Ok(Vec::new());
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }

        Ok(match self.phase {
            HandPhase::BiddingCandidate => vec![
                Action::Pass,
                Action::OrderUp { alone: false },
                Action::OrderUp { alone: true },
            ],
            HandPhase::BiddingSuit => {
                let turned_down = self.trump_candidate.suit;
                let mut actions = Vec::new();
                for suit in Suit::ALL {
                    if suit != turned_down {
                        actions.push(Action::CallSuit { suit, alone: false });
                        actions.push(Action::CallSuit { suit, alone: true });
                    }
                }
                if !(self.settings.stick_the_dealer && player == self.dealer) {
                    actions.push(Action::Pass);
                }
                actions
            }
            HandPhase::DealerDiscard => {
                let mut actions: Vec<Action> =
                    self.hands[self.dealer].iter().map(Action::Discard).collect();
                actions.push(Action::Discard(self.trump_candidate));
                actions
            }
            HandPhase::Playing => match &self.current_trick {
                Some(trick) => {
                    let held = self.hands[player].as_slice();
                    let playable = match trick.led() {
                        Some(led) => follow_suit_cards(held, led, trick.trump()),
                        None => held.to_vec(),
                    };
                    playable.into_iter().map(Action::Play).collect()
                }
                None => Vec::new(),
            },
            HandPhase::Done => Vec::new(),
        })
    }

    /// Advances the hand by one action. The action must be a member of the
    /// current legal set; validation happens before any mutation.
    pub(crate) fn apply(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        if self.phase == HandPhase::Done {
            return Err(GameError::GameOver);
        }
        let legal = self.legal_actions(player)?;
        if !legal.contains(&action) {
            return Err(self.diagnose_illegal(player, action).into());
        }

        match self.phase {
            HandPhase::BiddingCandidate | HandPhase::BiddingSuit => self.apply_bid(action),
            HandPhase::DealerDiscard => self.apply_discard(action),
            HandPhase::Playing => self.apply_play(player, action),
            HandPhase::Done => Err(GameError::GameOver),
        }
    }

    /// Picks the most specific error for an action that failed the legal-set
    /// membership check.
    fn diagnose_illegal(&self, player: PlayerId, action: Action) -> InvalidAction {
        match (self.phase, action) {
            (HandPhase::BiddingSuit, Action::Pass)
                if self.settings.stick_the_dealer && player == self.dealer =>
            {
                InvalidAction::DealerMustCall
            }
            (HandPhase::BiddingSuit, Action::CallSuit { suit, .. })
                if suit == self.trump_candidate.suit =>
            {
                InvalidAction::TurnedDownSuit
            }
            (HandPhase::DealerDiscard, Action::Discard(card))
                if card != self.trump_candidate && !self.hands[self.dealer].contains(card) =>
            {
                InvalidAction::CardNotInHand
            }
            (HandPhase::Playing, Action::Play(card)) if !self.hands[player].contains(card) => {
                InvalidAction::CardNotInHand
            }
            (HandPhase::Playing, Action::Play(_)) => InvalidAction::MustFollowSuit,
            _ => InvalidAction::WrongPhase,
        }
    }

    fn apply_bid(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Pass => {
                self.passes += 1;
                if self.passes == NUM_PLAYERS as u8 {
                    if self.phase == HandPhase::BiddingCandidate {
                        // Candidate turned down; its suit is off the table.
                        self.phase = HandPhase::BiddingSuit;
                        self.passes = 0;
                        self.current_player = next_seat(self.dealer);
                    } else {
                        // Nobody named trump: the hand is thrown in unscored.
                        self.phase = HandPhase::Done;
                    }
                } else {
                    self.current_player = next_seat(self.current_player);
                }
                Ok(())
            }
            Action::OrderUp { alone } => {
                self.order_trump(self.trump_candidate.suit, alone, true);
                Ok(())
            }
            Action::CallSuit { suit, alone } => {
                self.order_trump(suit, alone, false);
                Ok(())
            }
            _ => Err(InvalidAction::WrongPhase.into()),
        }
    }

    /// Records the maker and decides whether the dealer exchanges for the
    /// candidate. Only a round-one order triggers the pickup, and not when
    /// the dealer is the lone maker's sat-out partner.
    fn order_trump(&mut self, suit: Suit, alone: bool, ordered_up: bool) {
        self.maker = Some(self.current_player);
        self.alone = alone;
        self.trump_suit = Some(suit);

        let partner = partner_of(self.current_player);
        if ordered_up && !(alone && self.dealer == partner) {
            self.phase = HandPhase::DealerDiscard;
            self.current_player = self.dealer;
        } else {
            self.begin_play(suit);
        }
    }

    fn begin_play(&mut self, trump: Suit) {
        self.phase = HandPhase::Playing;
        self.current_trick = Some(Trick::new(trump, self.players_in_trick()));
        self.current_player = self.first_leader();
    }

    fn apply_discard(&mut self, action: Action) -> Result<(), GameError> {
        let Action::Discard(card) = action else {
            return Err(InvalidAction::WrongPhase.into());
        };
        let Some(trump) = self.trump_suit else {
            return Err(GameError::InvalidConfiguration(
                "dealer discard reached before trump was ordered",
            ));
        };

        // Discarding the candidate itself declines the pickup; any other
        // discard swaps it into the dealer's hand, keeping five cards.
        if card != self.trump_candidate {
            if !self.hands[self.dealer].remove(card) {
                return Err(InvalidAction::CardNotInHand.into());
            }
            self.hands[self.dealer].add(self.trump_candidate);
            self.kitty.push(card);
        }

        self.begin_play(trump);
        Ok(())
    }

    fn apply_play(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        let Action::Play(card) = action else {
            return Err(InvalidAction::WrongPhase.into());
        };
        let Some(trick) = self.current_trick.as_mut() else {
            return Err(GameError::InvalidConfiguration("no trick in progress"));
        };

        if !self.hands[player].remove(card) {
            return Err(InvalidAction::CardNotInHand.into());
        }
        self.publicly_known_cards.push(card);
        trick.play(card, player)?;

        if trick.is_complete() {
            self.finish_trick()
        } else {
            self.current_player = self.next_active_seat(player);
            Ok(())
        }
    }

    fn finish_trick(&mut self) -> Result<(), GameError> {
        let Some(mut trick) = self.current_trick.take() else {
            return Err(GameError::InvalidConfiguration("no trick in progress"));
        };
        let winner = trick.resolve()?;
        self.team_tricks[team_of(winner)] += 1;
        let trump = trick.trump();
        self.tricks.push(trick);

        if self.tricks.len() == TRICKS_PER_HAND {
            self.phase = HandPhase::Done;
        } else {
            self.current_trick = Some(Trick::new(trump, self.players_in_trick()));
            self.current_player = winner;
        }
        Ok(())
    }

    /// Points `team` earned this hand. Zero until the hand is done, and zero
    /// for both teams when the hand was thrown in.
    pub fn points_for(&self, team: TeamId) -> u8 {
        if self.phase != HandPhase::Done {
            return 0;
        }
        let Some(maker) = self.maker else {
            return 0;
        };
        let tricks = self.team_tricks[team];
        if team == team_of(maker) {
            if tricks as usize == TRICKS_PER_HAND {
                if self.alone { MARCH_ALONE_POINTS } else { MARCH_POINTS }
            } else if tricks >= TRICKS_TO_MAKE {
                SINGLE_POINTS
            } else {
                0
            }
        } else if tricks >= TRICKS_TO_MAKE {
            EUCHRE_POINTS
        } else {
            0
        }
    }

    /// Whether `team` ordered trump and was euchred.
    pub fn is_team_set(&self, team: TeamId) -> bool {
        self.phase == HandPhase::Done
            && self.maker.is_some_and(|maker| team_of(maker) == team)
            && self.team_tricks[team] < TRICKS_TO_MAKE
    }
}
