//! CLI blackjack example.
//!
//! Set `RUST_LOG=hitstand=debug` to see the engine's trace on stderr.

use core::error::Error;
use core::str::FromStr;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hitstand::input::{ELIMINATED_MESSAGE, GOODBYE_MESSAGE, WELCOME_MESSAGE, parse_amount};
use hitstand::{BetError, Decision, Game, GameOptions, GameState, Replay};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("{WELCOME_MESSAGE}");

    let Some(balance) = prompt_amount("Enter your initial amount of coins: ") else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_starting_balance(balance);
    let mut game = Game::new(options, seed);

    loop {
        if let Err(err) = play_round(&mut game) {
            eprintln!("Round aborted: {err}");
            return;
        }

        if game.is_eliminated() {
            println!("{ELIMINATED_MESSAGE}");
            break;
        }

        match prompt_choice::<Replay>("Wanna play another one? (y/n): ") {
            Some(Replay::Again) => println!("Lets go!"),
            Some(Replay::Quit) | None => {
                println!("{GOODBYE_MESSAGE}");
                break;
            }
        }
    }
}

fn play_round(game: &mut Game) -> Result<(), Box<dyn Error>> {
    game.deal()?;
    println!("{}", game.dealer());
    println!("{}", game.player());

    loop {
        let Some(bet) = prompt_amount("Enter your bet: ") else {
            return Ok(());
        };
        match game.bet(bet) {
            Ok(()) => break,
            Err(BetError::InsufficientFunds) => {
                println!("You only have {} coins.", game.balance());
            }
            Err(err) => return Err(err.into()),
        }
    }

    while game.state() == GameState::PlayerTurn {
        match prompt_choice::<Decision>("Hit me (h) or stop (s): ") {
            Some(Decision::Hit) => {
                game.hit()?;
                println!("{}", game.player());
            }
            Some(Decision::Stand) => game.stand()?,
            None => return Ok(()),
        }
    }

    if game.state() == GameState::DealerTurn {
        println!("Now it is the dealer turn");
        game.dealer_play()?;
        println!("{}", game.dealer());
    }

    if let Some(result) = game.result() {
        println!("{result}");
    }

    Ok(())
}

/// Reads one trimmed line, or `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_owned()),
    }
}

fn prompt_amount(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        match parse_amount(&input) {
            Ok(value) => return Some(value),
            Err(err) => println!("Please enter a whole number: {err}"),
        }
    }
}

fn prompt_choice<T>(prompt: &str) -> Option<T>
where
    T: FromStr,
{
    loop {
        let input = prompt_line(prompt)?;
        if let Ok(choice) = input.parse::<T>() {
            return Some(choice);
        }
    }
}
