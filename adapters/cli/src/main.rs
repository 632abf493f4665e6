#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and plays a terminal hacking puzzle.

mod config;
mod render;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use terminal_hack_core::{DifficultyTier, GuessError, DEFAULT_ATTEMPTS, DEFAULT_SAMPLING_DRAW_CAP};
use terminal_hack_session::{PuzzleSession, SamplingConfig, SessionConfig};
use terminal_hack_system_rng::{ClockSeed, FixedSeed, SeedSource, Xoroshiro128};
use terminal_hack_system_word_sampling::CanonicalWords;

use crate::config::{FileConfig, TierArg};

/// Where the session seed comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SeedChoice {
    /// Use `--seed` or the config file's seed.
    Fixed,
    /// Fold the current UTC time of day.
    Clock,
    /// Draw from the operating system's entropy source.
    Entropy,
}

#[derive(Debug, Parser)]
#[command(name = "terminal-hack", about = "Generate and crack a terminal password puzzle")]
struct Args {
    /// Lock difficulty of the terminal.
    #[arg(long, value_enum)]
    tier: Option<TierArg>,
    /// Player science skill, 0 to 100.
    #[arg(long)]
    skill: Option<u32>,
    /// Seed for reproducible puzzles; implies `--seed-source fixed`.
    #[arg(long)]
    seed: Option<u64>,
    /// Seed source used when no explicit seed is configured.
    #[arg(long, value_enum)]
    seed_source: Option<SeedChoice>,
    /// TOML file supplying defaults for the other options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Guesses to submit in order; may be repeated.
    #[arg(long = "guess", value_name = "WORD")]
    guesses: Vec<String>,
    /// Read guesses from standard input until the session ends.
    #[arg(long)]
    interactive: bool,
    /// Print the end-of-run report as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

struct EntropySeed;

impl SeedSource for EntropySeed {
    fn seed(&self) -> u64 {
        rand::random()
    }
}

/// Entry point for the terminal hacking command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let tier: DifficultyTier = args
        .tier
        .or(file.tier)
        .map(DifficultyTier::from)
        .unwrap_or(DifficultyTier::Easy);
    let skill = args.skill.or(file.skill).unwrap_or(tier.minimum_skill());
    let seed = resolve_seed(&args, &file)?;
    let config = SessionConfig::new(
        file.attempts.unwrap_or(DEFAULT_ATTEMPTS),
        SamplingConfig::new(file.sampling_draw_cap.unwrap_or(DEFAULT_SAMPLING_DRAW_CAP)),
    );
    log::info!("generating {tier} puzzle for skill {skill} with seed {seed}");

    let mut session = PuzzleSession::generate_with(
        tier,
        skill,
        Xoroshiro128::from_seed(seed),
        &CanonicalWords,
        config,
    )
    .context("failed to generate terminal puzzle")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        write_lines(&mut out, render::summary(&session))?;
        write_lines(&mut out, render::memory_dump(session.noise()))?;
        write_lines(&mut out, session.words().iter().cloned())?;
    }

    for guess in &args.guesses {
        if !play_guess(&mut session, guess, &mut out, args.json)? {
            break;
        }
    }

    if args.interactive && !session.state().is_closed() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read guess from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            if !play_guess(&mut session, &line, &mut out, args.json)? {
                break;
            }
        }
    }

    let report = session.report();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("failed to encode report")?;
        writeln!(out)?;
    } else {
        write_lines(&mut out, report.lines())?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn resolve_seed(args: &Args, file: &FileConfig) -> Result<u64> {
    let explicit = args.seed.or(file.seed);
    let choice = args.seed_source.unwrap_or(if explicit.is_some() {
        SeedChoice::Fixed
    } else {
        SeedChoice::Clock
    });

    let seed = match (choice, explicit) {
        (SeedChoice::Fixed, Some(seed)) => FixedSeed::new(seed).seed(),
        (SeedChoice::Fixed, None) => {
            bail!("--seed-source fixed requires --seed or a seed in the config file")
        }
        (SeedChoice::Clock, _) => ClockSeed.seed(),
        (SeedChoice::Entropy, _) => EntropySeed.seed(),
    };
    Ok(seed)
}

/// Submits one guess; returns whether the session still accepts guesses.
fn play_guess(
    session: &mut PuzzleSession,
    guess: &str,
    out: &mut impl Write,
    quiet: bool,
) -> Result<bool> {
    match session.submit_guess(guess) {
        Ok(outcome) => {
            if !quiet {
                let line = render::guess_line(
                    guess.trim(),
                    outcome,
                    session.word_length().get(),
                );
                writeln!(out, "{line}")?;
            }
            Ok(!session.state().is_closed())
        }
        Err(GuessError::UnknownWord(word)) => {
            log::warn!("ignoring guess '{word}': not a candidate word");
            Ok(true)
        }
        Err(GuessError::SessionClosed) => Ok(false),
    }
}

fn write_lines(
    out: &mut impl Write,
    lines: impl IntoIterator<Item = String>,
) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
