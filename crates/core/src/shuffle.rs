//! Shuffle module - random scrambles
//!
//! A scramble is a list of random quarter turns drawn from the cube's move
//! list. Face turns only by default; inner slices can be mixed in. A move is
//! never drawn twice in a row.
//!
//! Scrambles can run all at once ([`Cube::shuffle`]) or one move at a time
//! ([`Cube::begin_shuffle`] then [`Cube::step_shuffle`]), which lets a
//! renderer animate each turn. Input is locked while a scramble is playing.

use std::collections::VecDeque;

use log::info;

use crate::cube::{Cube, CubeError, Phase};
use crate::rng::SimpleRng;
use crate::taxonomy::MoveTaxonomy;
use crate::types::{CubeEvent, Move, DEFAULT_SHUFFLE_MOVES};

/// Scramble settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleConfig {
    /// Number of quarter turns
    pub moves: usize,
    /// Draw inner slice turns too
    pub include_slices: bool,
}

impl ShuffleConfig {
    pub fn with_moves(moves: usize) -> Self {
        Self {
            moves,
            ..Self::default()
        }
    }
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            moves: DEFAULT_SHUFFLE_MOVES,
            include_slices: false,
        }
    }
}

/// Draw a scramble without applying it
///
/// # Examples
///
/// ```
/// use cubesim_core::{generate_shuffle, MoveTaxonomy, ShuffleConfig, SimpleRng};
///
/// let taxonomy = MoveTaxonomy::new(3);
/// let moves = generate_shuffle(&taxonomy, &mut SimpleRng::new(1), &ShuffleConfig::default());
/// assert_eq!(moves.len(), 40);
/// assert!(moves.windows(2).all(|w| w[0] != w[1]));
/// ```
pub fn generate_shuffle(
    taxonomy: &MoveTaxonomy,
    rng: &mut SimpleRng,
    config: &ShuffleConfig,
) -> Vec<Move> {
    let alphabet = if config.include_slices {
        taxonomy.moves()
    } else {
        taxonomy.outer_moves()
    };

    let mut moves: Vec<Move> = Vec::with_capacity(config.moves);
    while moves.len() < config.moves {
        let Some(&mv) = rng.choose(&alphabet) else {
            break;
        };
        if moves.last() == Some(&mv) {
            continue;
        }
        moves.push(mv);
    }
    moves
}

impl Cube {
    /// Scramble with `count` face turns, played out immediately.
    ///
    /// Returns the moves applied. Any in-progress turn animation is dropped.
    pub fn shuffle(&mut self, rng: &mut SimpleRng, count: usize) -> Vec<Move> {
        self.shuffle_with(rng, &ShuffleConfig::with_moves(count))
    }

    pub fn shuffle_with(&mut self, rng: &mut SimpleRng, config: &ShuffleConfig) -> Vec<Move> {
        self.phase = Phase::Idle;
        let moves = self.start_shuffle(rng, config);
        while self.step_shuffle().is_some() {}
        moves
    }

    /// Queue a scramble to be played with [`Cube::step_shuffle`]
    pub fn begin_shuffle(
        &mut self,
        rng: &mut SimpleRng,
        config: &ShuffleConfig,
    ) -> Result<Vec<Move>, CubeError> {
        if !self.is_idle() {
            return Err(CubeError::Busy);
        }
        Ok(self.start_shuffle(rng, config))
    }

    /// Apply the next queued scramble move.
    ///
    /// Returns `None` when no scramble is playing. After the last move the
    /// cube returns to idle and is marked as scrambled.
    pub fn step_shuffle(&mut self) -> Option<Move> {
        let Phase::Shuffling(queue) = &mut self.phase else {
            return None;
        };
        let next = queue.pop_front();

        if let Some(mv) = next {
            self.apply_move(mv);
        }
        if matches!(&self.phase, Phase::Shuffling(queue) if queue.is_empty()) {
            self.finish_shuffle();
        }
        next
    }

    fn start_shuffle(&mut self, rng: &mut SimpleRng, config: &ShuffleConfig) -> Vec<Move> {
        let moves = generate_shuffle(&self.taxonomy, rng, config);
        info!(
            "shuffling {}x{}x{} cube with {} moves",
            self.dimension,
            self.dimension,
            self.dimension,
            moves.len()
        );

        self.last_shuffle = moves.clone();
        self.phase = Phase::Shuffling(moves.iter().copied().collect::<VecDeque<_>>());
        if moves.is_empty() {
            self.finish_shuffle();
        }
        moves
    }

    fn finish_shuffle(&mut self) {
        self.phase = Phase::Idle;
        self.shuffled = true;
        self.moves_since_shuffle = 0;
        self.last_event = Some(CubeEvent::Shuffled {
            moves: self.last_shuffle.len(),
        });
    }
}
