//! Cube state - piece arena, rotation groups, and turn lifecycle
//!
//! The cube owns every piece and two indexes over them:
//!
//! - **Groups**: for each layer, the pieces currently in it. A turn reads the
//!   group of the turning layer and rewrites the others.
//! - **Coordinate index**: the piece at each occupied cell, rebuilt after
//!   every turn.
//!
//! A simple phase machine gates user input: one turn may be animating at a
//! time, and a scramble blocks input until it has been played out.

use std::collections::{BTreeMap, HashMap, VecDeque};

use log::{info, warn};

use crate::piece::{Piece, PieceId};
use crate::snapshot::{CubeSnapshot, PhaseSnapshot, PieceSnapshot};
use crate::solved::SolvedLayout;
use crate::taxonomy::MoveTaxonomy;
use crate::types::{Coord, CubeEvent, Layer, Move, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};

/// Errors reported by the cube API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    #[error("unsupported cube dimension {0}, expected 2 to 5")]
    UnsupportedDimension(u8),
    #[error("layer {layer} does not exist on a {dimension}x{dimension}x{dimension} cube")]
    MissingLayer { layer: Layer, dimension: u8 },
    #[error("cube is busy with another turn or a scramble")]
    Busy,
}

/// What the cube is doing between calls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A turn has been applied and its animation has not finished
    Animating(Move),
    /// Scramble moves still to play
    Shuffling(VecDeque<Move>),
}

/// Full puzzle state
#[derive(Debug, Clone)]
pub struct Cube {
    pub(crate) dimension: u8,
    pub(crate) taxonomy: MoveTaxonomy,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) groups: BTreeMap<Layer, Vec<PieceId>>,
    pub(crate) coordinate_index: HashMap<Coord, PieceId>,
    pub(crate) phase: Phase,
    /// Set once a scramble completes; solved events only fire after one.
    pub(crate) shuffled: bool,
    pub(crate) moves_applied: u32,
    pub(crate) moves_since_shuffle: u32,
    pub(crate) last_shuffle: Vec<Move>,
    /// Last notable transition (consumed by observers).
    pub(crate) last_event: Option<CubeEvent>,
}

impl Cube {
    /// Create a solved cube of the given dimension
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesim_core::Cube;
    ///
    /// let cube = Cube::new(3).unwrap();
    /// assert_eq!(cube.pieces().len(), 26);
    /// assert!(cube.is_solved());
    /// assert!(Cube::new(6).is_err());
    /// ```
    pub fn new(dimension: u8) -> Result<Self, CubeError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(CubeError::UnsupportedDimension(dimension));
        }

        let layout = SolvedLayout::new(dimension);
        let pieces: Vec<Piece> = layout
            .iter()
            .filter_map(|(coord, stickers)| Piece::new(coord, stickers.clone(), dimension))
            .collect();

        let mut cube = Self {
            dimension,
            taxonomy: MoveTaxonomy::new(dimension),
            pieces,
            groups: BTreeMap::new(),
            coordinate_index: HashMap::new(),
            phase: Phase::Idle,
            shuffled: false,
            moves_applied: 0,
            moves_since_shuffle: 0,
            last_shuffle: Vec::new(),
            last_event: None,
        };
        cube.rebuild_groups();
        cube.rebuild_coordinate_index();
        info!(
            "built {}x{}x{} cube with {} pieces",
            dimension,
            dimension,
            dimension,
            cube.pieces.len()
        );
        Ok(cube)
    }

    /// Like [`Cube::new`], for dimensions known to be valid
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is outside 2..=5.
    pub fn with_dimension(dimension: u8) -> Self {
        match Self::new(dimension) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn taxonomy(&self) -> &MoveTaxonomy {
        &self.taxonomy
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// The piece occupying a cell
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.piece_id_at(coord).and_then(|id| self.piece(id))
    }

    pub fn piece_id_at(&self, coord: Coord) -> Option<PieceId> {
        self.coordinate_index.get(&coord).copied()
    }

    /// Lookup by `"xyz"` key, e.g. `"021"`
    pub fn piece_by_key(&self, key: &str) -> Option<&Piece> {
        Coord::from_key(key).and_then(|coord| self.piece_at(coord))
    }

    /// Pieces currently in `layer`; empty for layers this cube lacks
    pub fn group(&self, layer: Layer) -> &[PieceId] {
        self.groups.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (Layer, &[PieceId])> + '_ {
        self.groups.iter().map(|(&layer, ids)| (layer, ids.as_slice()))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    pub fn is_shuffling(&self) -> bool {
        matches!(self.phase, Phase::Shuffling(_))
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn moves_applied(&self) -> u32 {
        self.moves_applied
    }

    pub fn moves_since_shuffle(&self) -> u32 {
        self.moves_since_shuffle
    }

    /// Moves of the most recent scramble, empty after a reset
    pub fn last_shuffle(&self) -> &[Move] {
        &self.last_shuffle
    }

    /// Check that a move names a layer of this cube
    pub fn validate(&self, mv: Move) -> Result<(), CubeError> {
        if self.taxonomy.has_layer(mv.layer) {
            Ok(())
        } else {
            Err(CubeError::MissingLayer {
                layer: mv.layer,
                dimension: self.dimension,
            })
        }
    }

    /// Apply a turn, rejecting layers this cube does not have
    pub fn try_apply(&mut self, mv: Move) -> Result<(), CubeError> {
        self.validate(mv)?;
        self.apply_move(mv);
        Ok(())
    }

    /// Apply every move in order, stopping at the first invalid one
    pub fn apply_sequence(&mut self, moves: &[Move]) -> Result<(), CubeError> {
        for &mv in moves {
            self.try_apply(mv)?;
        }
        Ok(())
    }

    /// Start a user turn.
    ///
    /// The turn is applied immediately and the cube enters the animating
    /// phase until [`Cube::finish_animation`]. Returns false when another
    /// turn or a scramble is in progress, or the layer does not exist.
    pub fn try_begin_move(&mut self, mv: Move) -> bool {
        if !self.is_idle() {
            return false;
        }
        if let Err(err) = self.validate(mv) {
            warn!("rejected move {}: {}", mv, err);
            return false;
        }

        self.apply_move(mv);
        self.phase = Phase::Animating(mv);
        true
    }

    /// The renderer finished animating the current turn
    pub fn finish_animation(&mut self) {
        if self.is_rotating() {
            self.phase = Phase::Idle;
        }
    }

    /// Take and clear the last event
    pub fn take_event(&mut self) -> Option<CubeEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<CubeEvent> {
        self.last_event
    }

    /// Return every piece to its home cell and orientation.
    ///
    /// Clears the scrambled flag and any in-progress turn or scramble.
    pub fn reset(&mut self) {
        let dimension = self.dimension;
        for piece in &mut self.pieces {
            piece.reset(dimension);
        }
        self.rebuild_groups();
        self.rebuild_coordinate_index();
        self.phase = Phase::Idle;
        self.shuffled = false;
        self.moves_applied = 0;
        self.moves_since_shuffle = 0;
        self.last_shuffle.clear();
        self.last_event = None;
        info!("cube reset");
    }

    /// Whether every group matches the memberships recorded on its pieces
    /// and every membership matches the piece's cell
    pub fn is_consistent(&self) -> bool {
        let pieces_ok = self
            .pieces
            .iter()
            .all(|p| p.layers_consistent(self.dimension));

        let groups_ok = self.groups.iter().all(|(&layer, ids)| {
            ids.iter()
                .all(|&id| self.piece(id).is_some_and(|p| p.in_layer(layer)))
        });

        let counted: usize = self.groups.values().map(Vec::len).sum();
        pieces_ok && groups_ok && counted == self.pieces.len() * 3
    }

    pub fn snapshot_into(&self, out: &mut CubeSnapshot) {
        out.clear();
        out.dimension = self.dimension;
        out.phase = match &self.phase {
            Phase::Idle => PhaseSnapshot::Idle,
            Phase::Animating(mv) => PhaseSnapshot::Animating { turn: *mv },
            Phase::Shuffling(queue) => PhaseSnapshot::Shuffling {
                remaining: queue.len(),
            },
        };
        out.shuffled = self.shuffled;
        out.solved = self.is_solved();
        out.moves_applied = self.moves_applied;
        out.pieces.extend(
            self.pieces
                .iter()
                .enumerate()
                .map(|(id, piece)| PieceSnapshot::from_piece(id, piece)),
        );
    }

    pub fn snapshot(&self) -> CubeSnapshot {
        let mut s = CubeSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub(crate) fn rebuild_groups(&mut self) {
        self.groups = self
            .taxonomy
            .layers()
            .iter()
            .map(|&layer| (layer, Vec::new()))
            .collect();
        for (index, piece) in self.pieces.iter().enumerate() {
            for &layer in piece.layers() {
                self.groups.entry(layer).or_default().push(PieceId(index));
            }
        }
    }

    pub(crate) fn rebuild_coordinate_index(&mut self) {
        self.coordinate_index.clear();
        for (index, piece) in self.pieces.iter().enumerate() {
            self.coordinate_index
                .insert(piece.coordinates(), PieceId(index));
        }
    }

    /// Record a solved event when a scrambled cube comes back
    pub(crate) fn note_solved(&mut self) {
        if self.shuffled && !self.is_shuffling() && self.is_solved() {
            info!("cube solved after {} moves", self.moves_since_shuffle);
            self.last_event = Some(CubeEvent::Solved {
                moves_since_shuffle: self.moves_since_shuffle,
            });
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Direction, Face, PieceKind};

    fn count_kind(cube: &Cube, kind: PieceKind) -> usize {
        cube.pieces().iter().filter(|p| p.kind() == kind).count()
    }

    #[test]
    fn test_piece_counts_per_dimension() {
        for (d, total, corners, edges, centers) in [
            (2u8, 8, 8, 0, 0),
            (3, 26, 8, 12, 6),
            (4, 56, 8, 24, 24),
            (5, 98, 8, 36, 54),
        ] {
            let cube = Cube::new(d).unwrap();
            assert_eq!(cube.pieces().len(), total, "d={d}");
            assert_eq!(count_kind(&cube, PieceKind::Corner), corners);
            assert_eq!(count_kind(&cube, PieceKind::Edge), edges);
            assert_eq!(count_kind(&cube, PieceKind::Center), centers);
        }
    }

    #[test]
    fn test_unsupported_dimensions() {
        assert_eq!(Cube::new(1).unwrap_err(), CubeError::UnsupportedDimension(1));
        assert_eq!(Cube::new(6).unwrap_err(), CubeError::UnsupportedDimension(6));
    }

    #[test]
    #[should_panic(expected = "unsupported cube dimension")]
    fn test_with_dimension_panics() {
        let _ = Cube::with_dimension(7);
    }

    #[test]
    fn test_group_sizes() {
        let cube = Cube::new(4).unwrap();
        // Outer face: whole d x d layer
        assert_eq!(cube.group(Layer::Face(Face::W)).len(), 16);
        // Slice: ring of 4 edges and 8 centers
        assert_eq!(cube.group(Layer::Slice(Axis::WhiteYellow, 1)).len(), 12);
        assert!(cube.group(Layer::Slice(Axis::WhiteYellow, 3)).is_empty());
        assert!(cube.is_consistent());
    }

    #[test]
    fn test_coordinate_lookup() {
        let cube = Cube::new(3).unwrap();
        let corner = cube.piece_by_key("000").unwrap();
        assert_eq!(corner.kind(), PieceKind::Corner);
        assert_eq!(corner.colors(), &[Face::W, Face::B, Face::R]);
        assert!(cube.piece_by_key("111").is_none());
        assert!(cube.piece_by_key("abc").is_none());
        assert_eq!(
            cube.piece_at(Coord::new(1, 2, 1)).map(|p| p.kind()),
            Some(PieceKind::Center)
        );
    }

    #[test]
    fn test_try_apply_rejects_missing_layer() {
        let mut cube = Cube::new(2).unwrap();
        let mv = Move::new(Layer::Slice(Axis::BlueGreen, 1), Direction::Cw);
        assert_eq!(
            cube.try_apply(mv),
            Err(CubeError::MissingLayer {
                layer: mv.layer,
                dimension: 2
            })
        );
        assert!(cube.is_solved());
        assert_eq!(cube.moves_applied(), 0);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_apply_move_panics_on_missing_layer() {
        let mut cube = Cube::new(3).unwrap();
        cube.apply_move(Move::new(Layer::Slice(Axis::RedOrange, 2), Direction::Ccw));
    }

    #[test]
    fn test_begin_move_locks_until_animation_finishes() {
        let mut cube = Cube::new(3).unwrap();
        assert!(cube.try_begin_move(Move::cw(Face::W)));
        assert!(cube.is_rotating());
        assert_eq!(cube.phase(), &Phase::Animating(Move::cw(Face::W)));

        // Second turn while animating is ignored
        assert!(!cube.try_begin_move(Move::cw(Face::R)));
        assert_eq!(cube.moves_applied(), 1);

        cube.finish_animation();
        assert!(cube.is_idle());
        assert!(cube.try_begin_move(Move::ccw(Face::W)));
        cube.finish_animation();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_begin_move_rejects_missing_layer() {
        let mut cube = Cube::new(2).unwrap();
        assert!(!cube.try_begin_move(Move::new(Layer::Slice(Axis::WhiteYellow, 1), Direction::Cw)));
        assert!(cube.is_idle());
    }

    #[test]
    fn test_reset_restores_solved() {
        let mut cube = Cube::new(4).unwrap();
        cube.apply_move(Move::cw(Face::W));
        cube.apply_move(Move::new(Layer::Slice(Axis::RedOrange, 2), Direction::Ccw));
        assert!(!cube.is_solved());

        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.is_consistent());
        assert!(!cube.is_shuffled());
        assert_eq!(cube.moves_applied(), 0);
    }

    #[test]
    fn test_no_solved_event_without_shuffle() {
        let mut cube = Cube::new(3).unwrap();
        cube.apply_move(Move::cw(Face::O));
        cube.apply_move(Move::ccw(Face::O));
        assert!(cube.is_solved());
        assert_eq!(cube.take_event(), None);
    }
}
