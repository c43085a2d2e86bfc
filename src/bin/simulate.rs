//! Run euchre matches between scripted bots and report aggregate results.

use std::error::Error;
use std::process;

use clap::Parser;

use euchrebot::{
    Bot, GameBuilder, GameError, create_bot_from_spec, describe_action, label_for_spec,
    render_state,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0x5EED_CA2D_0000_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run euchre matches between scripted bots.",
    version
)]
struct Args {
    /// Number of matches to play.
    #[arg(short = 'g', long = "games", default_value_t = 100)]
    games: usize,

    /// Base RNG seed (deck and bot rngs are derived deterministically).
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Enable the stick-the-dealer variant.
    #[arg(long)]
    stick_the_dealer: bool,

    /// Score a team needs to win a match.
    #[arg(long, default_value_t = 10)]
    winning_score: u8,

    /// Bot specs for the four seats (random[:seed] or heuristic). Fewer
    /// than four specs are cycled around the table.
    #[arg(long = "bots", num_args = 1..=4, default_values_t = [String::from("random")])]
    bots: Vec<String>,

    /// Print the state and chosen action for every turn of the first match.
    #[arg(long)]
    visualize: bool,

    /// Safety valve: abort a match after this many steps.
    #[arg(long, default_value_t = 100_000)]
    max_steps: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let seat_specs: Vec<String> = (0..4).map(|seat| args.bots[seat % args.bots.len()].clone()).collect();

    let mut team_wins = [0usize; 2];
    let mut team_sets = [0usize; 2];
    let mut hands_total = 0usize;

    for game_index in 0..args.games {
        let match_seed = args.seed ^ ((game_index as u64 + 1) * 0x9E37_79B9);
        let mut game = GameBuilder::new()
            .with_seed(match_seed)
            .with_stick_the_dealer(args.stick_the_dealer)
            .with_winning_score(args.winning_score)
            .build()?;

        let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(seat_specs.len());
        for (seat, spec) in seat_specs.iter().enumerate() {
            bots.push(create_bot_from_spec(spec, seat, match_seed)?);
        }

        let mut steps = 0usize;
        while !game.is_finished() {
            if steps >= args.max_steps {
                return Err(format!("match {game_index} exceeded {} steps", args.max_steps).into());
            }
            let current = game.current_player();
            let state = game.state_view(current)?;
            let legal_actions = game.legal_actions(current)?;
            if legal_actions.is_empty() {
                return Err(GameError::InvalidConfiguration(
                    "no legal actions available for current player",
                )
                .into());
            }
            let action = bots[current].select_action(&state, &legal_actions);
            if args.visualize && game_index == 0 {
                println!("{}", render_state(&state));
                println!("Player {current} -> {}\n", describe_action(&action));
            }
            game.apply_action(current, action)?;
            steps += 1;
        }

        if let Some(winner) = game.winner() {
            team_wins[winner] += 1;
        }
        let sets = game.sets();
        team_sets[0] += sets[0] as usize;
        team_sets[1] += sets[1] as usize;
        hands_total += game.hands_played();
    }

    let labels: Vec<String> = seat_specs.iter().map(|spec| label_for_spec(spec)).collect();
    println!(
        "Seats: 0={} 2={} (Team 0)  vs  1={} 3={} (Team 1)",
        labels[0], labels[2], labels[1], labels[3]
    );
    println!(
        "Matches: {}  |  Team 0 wins: {}  |  Team 1 wins: {}",
        args.games, team_wins[0], team_wins[1]
    );
    println!(
        "Euchres suffered: Team 0 = {}  |  Team 1 = {}",
        team_sets[0], team_sets[1]
    );
    if args.games > 0 {
        println!(
            "Average hands per match: {:.1}",
            hands_total as f64 / args.games as f64
        );
    }

    Ok(())
}
