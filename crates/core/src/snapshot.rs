//! Snapshots - plain, serializable copies of the cube for observers
//!
//! A renderer or the command line reads a snapshot instead of borrowing the
//! live cube. Snapshots can be refilled in place with
//! [`Cube::snapshot_into`](crate::Cube::snapshot_into).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::types::{Coord, Face, Move, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    #[default]
    Idle,
    Animating {
        turn: Move,
    },
    Shuffling {
        remaining: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: usize,
    pub kind: PieceKind,
    pub colors: Vec<Face>,
    pub coordinates: Coord,
    /// Sticker color to the face it currently shows on
    pub orientation: BTreeMap<Face, Face>,
}

impl PieceSnapshot {
    pub fn from_piece(id: usize, piece: &Piece) -> Self {
        Self {
            id,
            kind: piece.kind(),
            colors: piece.colors().to_vec(),
            coordinates: piece.coordinates(),
            orientation: piece.orientation().iter().collect(),
        }
    }

    /// Color visible on `face`, if this piece has a sticker there
    pub fn color_on(&self, face: Face) -> Option<Face> {
        self.orientation
            .iter()
            .find(|(_, on)| **on == face)
            .map(|(&color, _)| color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub dimension: u8,
    pub phase: PhaseSnapshot,
    pub shuffled: bool,
    pub solved: bool,
    pub moves_applied: u32,
    pub pieces: Vec<PieceSnapshot>,
}

impl CubeSnapshot {
    pub fn clear(&mut self) {
        self.dimension = 0;
        self.phase = PhaseSnapshot::Idle;
        self.shuffled = false;
        self.solved = false;
        self.moves_applied = 0;
        self.pieces.clear();
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&PieceSnapshot> {
        self.pieces.iter().find(|p| p.coordinates == coord)
    }

    /// Sticker colors of one face as a `d x d` grid.
    ///
    /// Rows run along the first free axis of the face, columns along the
    /// second, both from coordinate 0.
    pub fn face_grid(&self, face: Face) -> Vec<Vec<Option<Face>>> {
        let d = self.dimension;
        let (a, b) = face.axis().free_axes();
        (0..d)
            .map(|i| {
                (0..d)
                    .map(|j| {
                        let mut cell = Coord::default();
                        cell.set(face.axis(), face.depth(d));
                        cell.set(a, i);
                        cell.set(b, j);
                        self.piece_at(cell).and_then(|p| p.color_on(face))
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Direction, Layer};
    use crate::Cube;

    #[test]
    fn test_solved_snapshot() {
        let cube = Cube::new(3).unwrap();
        let snap = cube.snapshot();
        assert_eq!(snap.dimension, 3);
        assert!(snap.solved);
        assert_eq!(snap.phase, PhaseSnapshot::Idle);
        assert_eq!(snap.pieces.len(), 26);

        for face in Face::ALL {
            let grid = snap.face_grid(face);
            assert!(grid.iter().flatten().all(|&c| c == Some(face)));
        }
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut cube = Cube::new(2).unwrap();
        let mut snap = CubeSnapshot::default();
        cube.snapshot_into(&mut snap);
        assert_eq!(snap.pieces.len(), 8);

        cube.apply_move(Move::cw(Face::R));
        cube.snapshot_into(&mut snap);
        assert_eq!(snap.pieces.len(), 8);
        assert!(!snap.solved);
        assert_eq!(snap.moves_applied, 1);
    }

    #[test]
    fn test_face_grid_after_turn() {
        let mut cube = Cube::new(3).unwrap();
        cube.apply_move(Move::cw(Face::W));
        let snap = cube.snapshot();

        // W itself still shows only white
        assert!(snap.face_grid(Face::W).iter().flatten().all(|&c| c == Some(Face::W)));
        // Columns run along x, so column 0 of B is the strip on the W side;
        // it now carries the stickers that were on O
        let blue = snap.face_grid(Face::B);
        assert!(blue.iter().all(|row| row[0] == Some(Face::O)));
        assert!(blue.iter().all(|row| row[1] == Some(Face::B) && row[2] == Some(Face::B)));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut cube = Cube::new(3).unwrap();
        assert!(cube.try_begin_move(Move::new(Layer::Slice(Axis::WhiteYellow, 1), Direction::Cw)));
        let snap = cube.snapshot();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["phase"]["state"], "animating");
        assert_eq!(json["phase"]["turn"]["layer"], "W#Y1");
        assert_eq!(json["pieces"][0]["kind"], "corner");
        assert_eq!(json["pieces"][0]["coordinates"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["pieces"][0]["orientation"]["W"], "W");
    }
}
