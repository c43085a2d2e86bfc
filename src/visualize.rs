use std::fmt::Write;

use crate::action::Action;
use crate::state::{GameStateView, GameStatus, HandPhase};

/// Renders a seat's view of the match for CLI play and debugging.
pub fn render_state(state: &GameStateView) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Team {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Scores: Team 0 = {}  |  Team 1 = {}  (euchres {} / {})",
        state.scores[0], state.scores[1], state.sets[0], state.sets[1]
    );
    let _ = writeln!(out, "Phase: {:?}", state.phase);
    let _ = writeln!(
        out,
        "Dealer: Player {}  |  Current: Player {}{}",
        state.dealer,
        state.current_player,
        if state.current_player == state.self_player {
            " (You)"
        } else {
            ""
        }
    );
    match state.trump_suit {
        Some(trump) => {
            let maker = state
                .maker
                .map(|maker| {
                    format!(
                        ", ordered by Player {maker}{}",
                        if state.maker_alone { " alone" } else { "" }
                    )
                })
                .unwrap_or_default();
            let _ = writeln!(out, "Trump: {trump}{maker}");
        }
        None => {
            let _ = writeln!(out, "Candidate: {}", state.trump_candidate);
        }
    }
    if matches!(state.phase, HandPhase::Playing | HandPhase::Done) {
        let plays = state
            .current_trick
            .plays
            .iter()
            .map(|(card, player)| format!("P{player}:{card}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(
            out,
            "Trick {} of 5: {}",
            (state.tricks_completed + 1).min(5),
            if plays.is_empty() { "(empty)" } else { plays.as_str() }
        );
        let _ = writeln!(
            out,
            "Tricks taken: Team 0 = {}  |  Team 1 = {}",
            state.team_tricks[0], state.team_tricks[1]
        );
    }
    let hand = state
        .hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        out,
        "Hand: {}",
        if hand.is_empty() { "(empty)" } else { hand.as_str() }
    );
    out
}

/// One-line textual description of an action.
pub fn describe_action(action: &Action) -> String {
    match action {
        Action::Pass => String::from("Pass"),
        Action::OrderUp { alone: false } => String::from("Order up the candidate"),
        Action::OrderUp { alone: true } => String::from("Order up the candidate, going alone"),
        Action::CallSuit { suit, alone: false } => format!("Call {suit} as trump"),
        Action::CallSuit { suit, alone: true } => format!("Call {suit} as trump, going alone"),
        Action::Discard(card) => format!("Discard {card}"),
        Action::Play(card) => format!("Play {card}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let game = GameBuilder::new().build().expect("game");
        let seat = game.current_player();
        let view = game.state_view(seat).expect("state view");

        let text = render_state(&view);
        assert!(text.contains("Game status: Ongoing"));
        assert!(text.contains("(You)"));
        assert!(text.contains("Candidate:"));
        assert!(text.contains("Hand:"));

        assert_eq!(describe_action(&Action::Pass), "Pass");
        assert_eq!(
            describe_action(&Action::CallSuit { suit: Suit::Hearts, alone: true }),
            "Call \u{2665} as trump, going alone"
        );
        let card = Card::new(Suit::Spades, Rank::Jack);
        assert_eq!(describe_action(&Action::Play(card)), "Play J\u{2660}");
    }
}
