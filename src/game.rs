use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::action::{Action, PlayerId, TeamId};
use crate::card::{Card, DECK_SIZE, NUM_PLAYERS, NUM_TEAMS, Suit, standard_deck};
use crate::error::GameError;
use crate::hand::Hand;
use crate::state::{GameSettings, GameStateView, GameStatus, next_seat};

const DEFAULT_SEED: u64 = 0x5EED_CA2D_5EED_CA2D;

/// Configuration required to bootstrap a match.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub settings: GameSettings,
    /// Fixed first dealer; drawn uniformly from the seed when absent.
    pub dealer: Option<PlayerId>,
}

impl GameConfig {
    pub fn new(seed: u64) -> GameConfig {
        GameConfig {
            seed,
            settings: GameSettings::default(),
            dealer: None,
        }
    }
}

/// Builder that enables deterministic deck and dealer injection for testing
/// and RL experiments.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> GameBuilder {
        GameBuilder {
            config: GameConfig::new(DEFAULT_SEED),
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> GameBuilder {
        self.config.seed = seed;
        self
    }

    /// Enable or disable the stick-the-dealer variant.
    pub fn with_stick_the_dealer(mut self, enabled: bool) -> GameBuilder {
        self.config.settings.stick_the_dealer = enabled;
        self
    }

    /// Override the score a team needs to win the match (default 10).
    pub fn with_winning_score(mut self, score: u8) -> GameBuilder {
        self.config.settings.winning_score = score;
        self
    }

    /// Pin the first dealer instead of drawing one from the seed.
    pub fn with_dealer(mut self, dealer: PlayerId) -> GameBuilder {
        self.config.dealer = Some(dealer);
        self
    }

    /// Inject a fixed deck order. The deck is dealt exactly as given, without
    /// shuffling, for every hand of the match.
    pub fn with_deck(mut self, deck: Vec<Card>) -> GameBuilder {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> GameBuilder {
        GameBuilder::new()
    }
}

/// Core euchre match engine: deals hands, applies actions, accumulates team
/// scores and euchre counts until one team reaches the winning score.
pub struct Game {
    seed: u64,
    settings: GameSettings,
    status: GameStatus,
    deck: [Card; DECK_SIZE],
    shuffle_deck: bool,
    rng: StdRng,
    dealer: PlayerId,
    dealer_override: Option<PlayerId>,
    scores: [u8; NUM_TEAMS],
    sets: [u8; NUM_TEAMS],
    completed_hands: Vec<Hand>,
    hand: Hand,
    action_log: Vec<(PlayerId, u16)>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Game, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Game, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings =
            GameSettings::new(config.settings.stick_the_dealer, config.settings.winning_score)?;
        if let Some(dealer) = config.dealer {
            if dealer >= NUM_PLAYERS {
                return Err(GameError::InvalidPlayer(dealer));
            }
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let (mut deck, shuffle_deck) = match deck {
            Some(cards) => (validate_deck(cards)?, false),
            None => (standard_deck(), true),
        };
        let dealer = match config.dealer {
            Some(dealer) => dealer,
            None => rng.gen_range(0..NUM_PLAYERS),
        };

        if shuffle_deck {
            deck.shuffle(&mut rng);
        }
        let hand = Hand::deal(&deck, dealer, settings);

        Ok(Game {
            seed: config.seed,
            settings,
            status: GameStatus::Ongoing,
            deck,
            shuffle_deck,
            rng,
            dealer,
            dealer_override: config.dealer,
            scores: [0; NUM_TEAMS],
            sets: [0; NUM_TEAMS],
            completed_hands: Vec::new(),
            hand,
            action_log: Vec::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<TeamId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.hand.current_player()
    }

    /// Dealer of the hand currently on the table.
    pub fn dealer(&self) -> PlayerId {
        self.hand.dealer()
    }

    pub fn scores(&self) -> [u8; NUM_TEAMS] {
        self.scores
    }

    /// Times each team has been euchred so far.
    pub fn sets(&self) -> [u8; NUM_TEAMS] {
        self.sets
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.hand.trump_suit()
    }

    pub fn current_hand(&self) -> &Hand {
        &self.hand
    }

    pub fn completed_hands(&self) -> &[Hand] {
        &self.completed_hands
    }

    /// Hands fully played so far, counting the final hand of a finished match.
    pub fn hands_played(&self) -> usize {
        self.completed_hands.len() + usize::from(self.hand.is_done())
    }

    /// Applied actions in order, as `(player, action id)` pairs.
    pub fn action_log(&self) -> &[(PlayerId, u16)] {
        &self.action_log
    }

    pub(crate) fn deck_override(&self) -> Option<&[Card]> {
        if self.shuffle_deck { None } else { Some(&self.deck) }
    }

    pub(crate) fn dealer_override(&self) -> Option<PlayerId> {
        self.dealer_override
    }

    /// Legal actions for the given seat; empty once the match is over.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        self.hand.legal_actions(player)
    }

    /// The legal action set as raw integers, for agents addressing the
    /// action space directly.
    pub fn legal_action_ids(&self, player: PlayerId) -> Result<Vec<u16>, GameError> {
        Ok(self
            .legal_actions(player)?
            .into_iter()
            .map(Action::encode)
            .collect())
    }

    /// Advances the match by one action. The sole mutation entry point:
    /// illegal actions fail without changing any state.
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        self.hand.apply(player, action)?;
        self.action_log.push((player, action.encode()));
        if self.hand.is_done() {
            self.finish_hand();
        }
        Ok(())
    }

    /// Applies an action supplied as its integer identifier.
    pub fn apply_action_id(&mut self, player: PlayerId, id: u16) -> Result<(), GameError> {
        self.apply_action(player, Action::decode(id)?)
    }

    fn finish_hand(&mut self) {
        for team in 0..NUM_TEAMS {
            self.scores[team] = self.scores[team].saturating_add(self.hand.points_for(team));
            if self.hand.is_team_set(team) {
                self.sets[team] += 1;
            }
        }

        if let Some(winner) =
            (0..NUM_TEAMS).find(|&team| self.scores[team] >= self.settings.winning_score)
        {
            self.status = GameStatus::Finished { winner };
        }

        self.dealer = next_seat(self.dealer);
        if self.status == GameStatus::Ongoing {
            if self.shuffle_deck {
                self.deck.shuffle(&mut self.rng);
            }
            let next = Hand::deal(&self.deck, self.dealer, self.settings);
            self.completed_hands
                .push(std::mem::replace(&mut self.hand, next));
        }
        // When the match just ended, the final hand stays on the table for
        // inspection and is counted by `hands_played`.
    }

    /// Snapshot of the match as seen from one seat.
    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        Ok(GameStateView {
            settings: self.settings,
            status: self.status,
            phase: self.hand.phase(),
            self_player: perspective,
            current_player: self.hand.current_player(),
            dealer: self.hand.dealer(),
            trump_candidate: self.hand.trump_candidate(),
            trump_suit: self.hand.trump_suit(),
            maker: self.hand.maker(),
            maker_alone: self.hand.is_maker_alone(),
            hand: self.hand.player_cards(perspective)?,
            current_trick: self.hand.current_trick_view(),
            tricks_completed: self.hand.tricks_completed(),
            team_tricks: self.hand.team_tricks(),
            scores: self.scores,
            sets: self.sets,
            publicly_known_cards: self.hand.publicly_known_cards().to_vec(),
        })
    }
}

fn validate_deck(cards: Vec<Card>) -> Result<[Card; DECK_SIZE], GameError> {
    if cards.len() != DECK_SIZE {
        return Err(GameError::InvalidConfiguration(
            "deck must contain exactly 24 cards",
        ));
    }
    let mut seen = [false; 40];
    for card in &cards {
        let id = card.id() as usize;
        if seen[id] {
            return Err(GameError::InvalidConfiguration(
                "deck contains duplicate cards",
            ));
        }
        seen[id] = true;
    }
    cards
        .try_into()
        .map_err(|_| GameError::InvalidConfiguration("deck must contain exactly 24 cards"))
}
