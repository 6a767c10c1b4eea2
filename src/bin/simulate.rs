//! Simulate Binary
//!
//! Deals complete Texas Hold'em hands to a table, runs each board out to
//! the river, and settles the showdown.
//!
//! Options: --seats, --hands, --json

use clap::Parser;
use showdown::cards::street::Street;
use showdown::evaluation::strength::Strength;
use showdown::gameplay::game::Game;

#[derive(Parser)]
#[command(about = "deal and settle Texas Hold'em showdowns")]
struct Args {
    /// players at the table
    #[arg(long, default_value_t = 4)]
    seats: usize,
    /// hands to deal
    #[arg(long, default_value_t = 1)]
    hands: usize,
    /// print a JSON summary of each hand to stdout
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Summary {
    board: String,
    seats: Vec<Seat>,
    winners: Vec<usize>,
}

#[derive(serde::Serialize)]
struct Seat {
    hole: String,
    strength: Strength,
}

fn main() {
    showdown::log();
    let args = Args::parse();
    for hand in 0..args.hands {
        log::info!("hand {}", hand);
        let mut game = Game::new(args.seats);
        while game.street() != Street::Rive {
            game.reveal();
        }
        let strengths = game.strengths();
        for (seat, strength) in strengths.iter().enumerate() {
            log::info!("seat {:<3} {} {}", seat, game.holes()[seat], strength);
        }
        let winners = game.showdown();
        log::info!("winners  {:?}", winners);
        if args.json {
            let summary = Summary {
                board: game.board().to_string(),
                seats: game
                    .holes()
                    .iter()
                    .zip(strengths.iter())
                    .map(|(hole, &strength)| Seat {
                        hole: hole.to_string(),
                        strength,
                    })
                    .collect(),
                winners,
            };
            let summary = serde_json::to_string(&summary).expect("serialize summary");
            println!("{}", summary);
        }
    }
}
