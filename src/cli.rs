//! Command-line driver.
//!
//! Builds a cube, optionally scrambles it, applies the moves given on the
//! command line, and prints either a text summary or a JSON snapshot.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::debug;

use crate::core::{Cube, ShuffleConfig, SimpleRng};
use crate::types::{Face, Move, DEFAULT_DIMENSION, DEFAULT_SHUFFLE_MOVES};

pub const USAGE: &str = "\
usage: cubesim [--dimension N] [--seed S] [--shuffle [COUNT]] [--slices] [--json] [MOVES...]

  --dimension N   cube size, 2 to 5 (default 3)
  --seed S        scramble seed (default: from the clock)
  --shuffle COUNT scramble with COUNT random turns before applying MOVES (default 40)
  --slices        allow inner slice turns in the scramble
  --json          print a JSON snapshot instead of the text summary

MOVES are W|cw, W#Y1|ccw, or the shorthand W, W', B#G2'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub dimension: u8,
    pub seed: Option<u32>,
    pub shuffle: Option<ShuffleConfig>,
    pub json: bool,
    pub help: bool,
    pub moves: Vec<Move>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            seed: None,
            shuffle: None,
            json: false,
            help: false,
            moves: Vec::new(),
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut include_slices = false;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.help = true,
            "--dimension" | "-d" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --dimension"))?;
                config.dimension = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --dimension value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--shuffle" => {
                // The count is optional; a following move or flag is not a count
                let count = match args.get(i + 1).map(|v| v.parse::<usize>()) {
                    Some(Ok(count)) => {
                        i += 1;
                        count
                    }
                    _ => DEFAULT_SHUFFLE_MOVES,
                };
                config.shuffle = Some(ShuffleConfig::with_moves(count));
            }
            "--slices" => include_slices = true,
            "--json" => config.json = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => {
                let mv = other
                    .parse::<Move>()
                    .map_err(|e| anyhow!("invalid move '{}': {}", other, e))?;
                config.moves.push(mv);
            }
        }
        i += 1;
    }

    if include_slices {
        let shuffle = config.shuffle.get_or_insert_with(ShuffleConfig::default);
        shuffle.include_slices = true;
    }
    Ok(config)
}

/// Seed derived from the wall clock, for unseeded runs
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Execute a parsed command line, writing the report to `out`
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    if config.help {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    }

    let mut cube = Cube::new(config.dimension)?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    let scramble = match &config.shuffle {
        Some(shuffle) => {
            debug!("scramble seed {}", seed);
            let mut rng = SimpleRng::new(seed);
            cube.shuffle_with(&mut rng, shuffle)
        }
        None => Vec::new(),
    };

    for &mv in &config.moves {
        cube.try_apply(mv)?;
    }

    if config.json {
        serde_json::to_writer_pretty(&mut *out, &cube.snapshot())?;
        writeln!(out)?;
        return Ok(());
    }

    let d = cube.dimension();
    writeln!(out, "cube: {}x{}x{} ({} pieces)", d, d, d, cube.pieces().len())?;
    if config.shuffle.is_some() {
        writeln!(out, "seed: {}", seed)?;
        writeln!(out, "scramble: {}", join_moves(&scramble))?;
    }
    if !config.moves.is_empty() {
        writeln!(out, "moves: {}", join_moves(&config.moves))?;
    }
    writeln!(out, "solved: {}", cube.is_solved())?;

    let snapshot = cube.snapshot();
    for face in Face::ALL {
        writeln!(out, "{} ({})", face, face.name())?;
        for row in snapshot.face_grid(face) {
            let line: String = row
                .iter()
                .map(|c| c.map(|f| f.as_char()).unwrap_or('.'))
                .collect();
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

fn join_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
