//! Terminal front end for the word garden.
//!
//! Interactive by default: type a letter and press Enter. `--autoplay` lets
//! a guessing policy play the whole game instead.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use word_garden::autoplay::{play_game, FrequencyGuesser, Guesser, RandomGuesser};
use word_garden::view::{Affordance, GameView, Scoreboard};
use word_garden::{GameConfig, GameEngine, Letter, Signal, SignalSink};

/// Typed on its own line to leave the game.
const QUIT_COMMAND: &str = ":q";

#[derive(Parser, Debug)]
#[command(name = "word-garden", version, about = "Guess the hidden word before the garden wilts")]
struct Cli {
    /// Incorrect guesses allowed per word.
    #[arg(long, default_value_t = 8)]
    max_incorrect: u32,

    /// Wilt duration after a miss, in milliseconds.
    #[arg(long, default_value_t = 750)]
    wilt_ms: u64,

    /// Let a policy play instead of reading guesses from stdin.
    #[arg(long, value_enum)]
    autoplay: Option<Strategy>,

    /// Seed for the random policy.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Random,
    Frequency,
}

/// Prints signals as one-line cues in place of sounds and animation.
struct TerminalSink;

impl SignalSink for TerminalSink {
    fn emit(&mut self, signal: Signal) {
        match signal {
            Signal::Sound(outcome) => println!("  ♪ {outcome}"),
            Signal::WiltStarted => println!("  the garden wilts..."),
            Signal::WiltCleared => println!("  the garden recovers."),
            Signal::RoundStarted { word_index } => println!("  -- word {} --", word_index + 1),
            Signal::GameRestarted => println!("  -- new game --"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::default()
        .with_max_incorrect_guesses(cli.max_incorrect)
        .with_wilt_duration(Duration::from_millis(cli.wilt_ms));

    match cli.autoplay {
        Some(strategy) => autoplay(config, strategy, cli.seed),
        None => interactive(config),
    }
}

fn autoplay(config: GameConfig, strategy: Strategy, seed: u64) -> Result<()> {
    let mut guesser: Box<dyn Guesser> = match strategy {
        Strategy::Random => Box::new(RandomGuesser::new(seed)),
        Strategy::Frequency => Box::new(FrequencyGuesser::new(config.words.clone())),
    };
    let mut engine = GameEngine::with_sink(config, TerminalSink).context("invalid game configuration")?;

    let summary = play_game(&mut engine, guesser.as_mut())?;

    for (i, round) in summary.rounds.iter().enumerate() {
        let result = if round.won { "guessed" } else { "missed" };
        println!(
            "word {}: {} {} in {} guesses ({} incorrect)",
            i + 1,
            round.word,
            result,
            round.guesses,
            round.incorrect_guesses
        );
    }
    println!("{}", Scoreboard::from_engine(&engine));
    println!("total guesses: {}", summary.total_guesses());
    Ok(())
}

fn interactive(config: GameConfig) -> Result<()> {
    let mut engine = GameEngine::with_sink(config, TerminalSink).context("invalid game configuration")?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        engine.poll_wilt(Instant::now());
        let view = GameView::capture(&engine);
        render(&view);

        let prompt = match view.affordance {
            Affordance::GuessLetter => format!("{} ({QUIT_COMMAND} to quit): ", view.affordance.label()),
            Affordance::AnotherWord | Affordance::PlayAgain => format!("{} [Enter] ", view.affordance.label()),
        };
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        if line.trim() == QUIT_COMMAND {
            break;
        }

        match view.affordance {
            Affordance::GuessLetter => match Letter::from_input(&line) {
                Some(letter) => {
                    engine.guess_letter(letter)?;
                }
                None => println!("  please enter a letter"),
            },
            Affordance::AnotherWord => engine.advance_word()?,
            Affordance::PlayAgain => engine.restart_game(),
        }
    }

    Ok(())
}

fn render(view: &GameView) {
    let guessed: String = view.letters_guessed.iter().map(|l| l.as_char()).collect();

    println!();
    println!("{}", view.scoreboard);
    println!("{}", view.status_message);
    println!();
    println!("    {}", view.revealed_word);
    println!();
    println!("[{}]  guessed: {}", view.flower_image, guessed);
}
