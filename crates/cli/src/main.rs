//! SteamGuessr terminal client
//!
//! Usage: steamguessr [appid]
//!
//! Without an app id a random game is picked from the proxy's top owned list.
//! Commands while guessing: `:skip` reveals and moves on, `:load <appid>`
//! switches to a given game, `:quit` exits.

mod client;
mod command;
mod config;
mod render;
mod round;

use client::{ProxyClient, RoundLoad};
use command::{parse_command, Command};
use config::Config;
use rand::seq::SliceRandom;
use round::{GameRound, GuessOutcome};
use std::io::{self, BufRead, Write};

/// Consecutive games that failed to load before giving up
const MAX_LOAD_FAILURES: u32 = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let client = ProxyClient::new(config.base_url())?;

    let mut next_appid = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.trim()
                .parse::<u64>()
                .map_err(|_| format!("Invalid app id {:?}. Usage: steamguessr [appid]", arg))?,
        ),
        None => None,
    };
    let mut pool: Vec<u64> = Vec::new();
    let mut load_failures = 0;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let appid = match next_appid.take() {
            Some(appid) => appid,
            None => pick_random(&client, &mut pool)?,
        };

        let mut round = match client.load_round(appid, config.attempt_limit()) {
            RoundLoad::Ready(round) => round,
            RoundLoad::NotFound => {
                println!("App {} not found, picking another game...", appid);
                pool.retain(|id| *id != appid);
                continue;
            }
            RoundLoad::Failed(message) => {
                load_failures += 1;
                if load_failures >= MAX_LOAD_FAILURES {
                    return Err(message.into());
                }
                println!("{} (app {}), picking another game...", message, appid);
                pool.retain(|id| *id != appid);
                continue;
            }
        };
        load_failures = 0;

        print_reviews(&round, &config)?;

        loop {
            print!("Guess the game (:skip, :load <appid>, :quit)> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;

            match parse_command(&line) {
                Command::Empty => continue,
                Command::Quit => return Ok(()),
                Command::Skip => {
                    round.reveal();
                    println!("Skipped.");
                    break;
                }
                Command::Load(appid) => {
                    round.reveal();
                    next_appid = Some(appid);
                    println!("Loading app {}.", appid);
                    break;
                }
                Command::InvalidLoad(arg) => {
                    println!("Invalid app id {:?}. Usage: :load <appid>", arg);
                }
                Command::Guess(guess) => match round.submit_guess(&guess) {
                    GuessOutcome::Correct => {
                        println!("Correct! Solved in {} attempt(s).", round.attempts());
                        break;
                    }
                    GuessOutcome::Incorrect { attempts_left: Some(left) } => {
                        println!("Incorrect, try again! ({} left)", left);
                    }
                    GuessOutcome::Incorrect { attempts_left: None } => {
                        println!("Incorrect, try again!");
                    }
                    GuessOutcome::OutOfAttempts => {
                        println!("Out of attempts.");
                        break;
                    }
                    GuessOutcome::Finished => break,
                },
            }
        }

        if round.is_solved() {
            println!("\nIt was {} (app {})", round.details.name, round.appid);
        } else {
            println!("\nThe game was: {} (app {})", round.details.name, round.appid);
        }
        print_reviews(&round, &config)?;
        println!("Next game!\n");
    }
}

/// Random app id from the top owned list, fetched on first use
fn pick_random(client: &ProxyClient, pool: &mut Vec<u64>) -> Result<u64, Box<dyn std::error::Error>> {
    if pool.is_empty() {
        *pool = client.top_appids()?;
    }
    pool.choose(&mut rand::thread_rng())
        .copied()
        .ok_or_else(|| "No games available from the server".into())
}

fn print_reviews(round: &GameRound, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if !round.is_blurred() && !round.details.header_image.is_empty() {
        println!("Header image: {}", round.details.header_image);
    }

    let redacted = round.redacted_reviews()?;
    if redacted.is_empty() {
        println!("No reviews found.");
        return Ok(());
    }

    println!();
    for (review, segments) in &redacted {
        println!("{}", render::render_card(review, segments, &config.mask));
    }
    Ok(())
}
