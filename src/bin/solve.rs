use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockrep::dial::{self, Dial};
use blockrep::input::{parse_ranges, parse_ranges_lossy};
use blockrep::utils::MAX_DIGITS;
use blockrep::{Mode, RangeEngineBuilder};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "solve")]
#[command(version, about = "Solve the gift-shop ID and dial puzzles")]
struct Cli {
    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Subcommand)]
enum Puzzle {
    /// Sum repeated-block IDs over a comma-separated range list
    Ranges {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Count blocks repeated two or more times instead of exactly twice
        #[arg(long)]
        part2: bool,

        /// Fail on malformed ranges instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Largest digit length to examine (clamped to 18)
        #[arg(long, default_value_t = MAX_DIGITS)]
        max_digits: u32,
    },

    /// Count dial landings on zero over L/R rotations
    Dial {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Count every click that lands on zero, not just rotation ends
        #[arg(long)]
        part2: bool,

        /// Fail on malformed rotations instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match cli.puzzle {
        Puzzle::Ranges {
            input,
            part2,
            strict,
            max_digits,
        } => {
            let text = read_input(&input)?;
            let ranges = if strict {
                parse_ranges(&text).context("malformed range list")?
            } else {
                parse_ranges_lossy(&text)
            };
            let mode = Mode::from_flag(part2);
            tracing::info!(?mode, ranges = ranges.len(), max_digits, "summing ranges");

            let engine = RangeEngineBuilder::new(mode.counter())
                .with_max_digits(max_digits)
                .build();
            let tally = engine.run(&ranges);
            if tally.checked_sum().is_none() {
                tracing::warn!(sum = %tally.sum, "sum exceeds 64 bits; printing the exact value");
            }
            println!("{}", tally.sum);
        }
        Puzzle::Dial {
            input,
            part2,
            strict,
        } => {
            let text = read_input(&input)?;
            let rotations = if strict {
                dial::parse_rotations(&text).context("malformed rotation list")?
            } else {
                dial::parse_rotations_lossy(&text)
            };
            tracing::info!(rotations = rotations.len(), part2, "turning dial");

            let answer = if part2 {
                dial::count_zero_clicks(Dial::default(), &rotations)
            } else {
                dial::count_zero_stops(Dial::default(), &rotations) as u64
            };
            println!("{answer}");
        }
    }

    Ok(())
}
