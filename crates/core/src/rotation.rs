//! Rotation engine - applying a quarter turn to the piece arena
//!
//! A turn touches only the pieces in the turning layer's group. For each of
//! them three things change together:
//!
//! 1. **Memberships**: the piece leaves the layers it rotates out of and joins
//!    the ones it rotates into, driven by the outer cycle and the auxiliary
//!    cycle tables.
//! 2. **Coordinates**: an exact integer quarter turn about the layer's axis.
//! 3. **Orientation**: every sticker on a cycle face steps to the next face.
//!
//! Memberships for the turning axis never change, so the snapshot of the
//! group taken before the turn stays valid while other groups are rewritten.

use log::{debug, trace};

use crate::cube::Cube;
use crate::piece::PieceId;
use crate::taxonomy::outer_cycle;
use crate::types::{Coord, Direction, Face, Layer, Move, PieceKind};

/// Cell reached by `coord` after a quarter turn of `layer`.
///
/// The two free coordinates `(a, b)`, taken in right-handed order, map to
/// `(d - 1 - b, a)` for a positive quarter turn and `(b, d - 1 - a)` for a
/// negative one. R, W, B and inner slices turn positive when clockwise; O, Y
/// and G turn positive when counter-clockwise.
///
/// # Examples
///
/// ```
/// use cubesim_core::rotation::quarter_turn;
/// use cubesim_core::types::{Coord, Direction, Face, Layer};
///
/// let w = Layer::Face(Face::W);
/// assert_eq!(quarter_turn(Coord::new(0, 0, 0), w, Direction::Cw, 3), Coord::new(0, 2, 0));
/// assert_eq!(quarter_turn(Coord::new(0, 2, 0), w, Direction::Ccw, 3), Coord::new(0, 0, 0));
/// ```
pub fn quarter_turn(coord: Coord, layer: Layer, direction: Direction, dimension: u8) -> Coord {
    let (a_axis, b_axis) = layer.axis().free_axes();
    let (a, b) = (coord.get(a_axis), coord.get(b_axis));
    let far = dimension - 1;
    let positive = layer.is_negative() == (direction == Direction::Cw);
    let (a, b) = if positive { (far - b, a) } else { (b, far - a) };

    let mut out = coord;
    out.set(a_axis, a);
    out.set(b_axis, b);
    out
}

impl Cube {
    /// Apply one quarter turn.
    ///
    /// Bypasses the phase lock; use [`Cube::try_begin_move`] for input that
    /// must respect an in-progress animation.
    ///
    /// # Panics
    ///
    /// Panics if the layer does not exist at this dimension (for example an
    /// inner slice on a 2x2x2). Use [`Cube::try_apply`] to get an error instead.
    pub fn apply_move(&mut self, mv: Move) {
        let dimension = self.dimension;
        assert!(
            mv.layer.exists_in(dimension),
            "layer {} does not exist on a {}x{}x{} cube",
            mv.layer,
            dimension,
            dimension,
            dimension
        );

        let members = self.group(mv.layer).to_vec();
        let cycle = outer_cycle(mv.layer, mv.direction);

        for &id in &members {
            match self.pieces[id.index()].kind() {
                PieceKind::Corner => self.advance_straddling(id, &cycle),
                PieceKind::Edge => self.turn_edge(id, mv, &cycle),
                PieceKind::Center => self.turn_center(id, mv, &cycle),
            }

            let piece = &mut self.pieces[id.index()];
            let from = piece.coordinates();
            piece.set_coordinates(quarter_turn(from, mv.layer, mv.direction, dimension));
            piece.orientation_mut().advance(&cycle);
            debug_assert!(
                piece.layers_consistent(dimension),
                "piece {:?} memberships {:?} disagree with cell {}",
                id,
                piece.layers(),
                piece.coordinates()
            );
        }

        self.rebuild_coordinate_index();
        self.moves_applied += 1;
        if !self.is_shuffling() {
            self.moves_since_shuffle = self.moves_since_shuffle.saturating_add(1);
        }
        debug!("applied {} to {} pieces", mv, members.len());

        self.note_solved();
    }

    /// Edges: an outer turn moves them one face along the cycle, then moves
    /// their inner slice. A slice turn carries them between two cycle faces.
    fn turn_edge(&mut self, id: PieceId, mv: Move, cycle: &[Face; 4]) {
        let Layer::Face(face) = mv.layer else {
            self.advance_straddling(id, cycle);
            return;
        };

        self.advance_adjacent(id, cycle);

        let piece = &self.pieces[id.index()];
        let next = piece.slice_off_axis(None).and_then(|slice| {
            let to = self
                .taxonomy
                .outer_to_inner(face, mv.direction)?
                .successor(slice)?;
            Some((slice, to))
        });
        match next {
            Some((from, to)) => self.transfer(id, from, to),
            None => self.broken_membership(id, "edge has no inner slice successor"),
        }
    }

    /// Centers: a slice turn moves them one face along the cycle and swaps
    /// their perpendicular slice. An outer turn rotates their slice pair.
    fn turn_center(&mut self, id: PieceId, mv: Move, cycle: &[Face; 4]) {
        match mv.layer {
            Layer::Slice(axis, _) => {
                self.advance_adjacent(id, cycle);

                let piece = &self.pieces[id.index()];
                let next = piece.slice_off_axis(Some(axis)).and_then(|slice| {
                    let to = self
                        .taxonomy
                        .inner_to_inner(axis, mv.direction)?
                        .successor(slice)?;
                    Some((slice, to))
                });
                match next {
                    Some((from, to)) => self.transfer(id, from, to),
                    None => self.broken_membership(id, "center has no perpendicular slice successor"),
                }
            }
            Layer::Face(face) => {
                let (a, b) = face.axis().free_axes();
                let piece = &self.pieces[id.index()];
                let next = piece
                    .layer_on(a)
                    .zip(piece.layer_on(b))
                    .and_then(|pair| {
                        let to = self
                            .taxonomy
                            .center_pairs(face, mv.direction)?
                            .successor(pair)?;
                        Some((pair, to))
                    });
                match next {
                    Some(((from_a, from_b), (to_a, to_b))) => {
                        self.transfer(id, from_a, to_a);
                        self.transfer(id, from_b, to_b);
                    }
                    None => self.broken_membership(id, "center has no slice pair successor"),
                }
            }
        }
    }

    /// Move a piece sitting on two consecutive cycle faces `c[i]`, `c[i+1]`
    /// from `c[i]` to `c[i+2]`; it stays on `c[i+1]`.
    fn advance_straddling(&mut self, id: PieceId, cycle: &[Face; 4]) {
        let piece = &self.pieces[id.index()];
        let found = (0..4).find(|&i| {
            piece.in_layer(Layer::Face(cycle[i])) && piece.in_layer(Layer::Face(cycle[(i + 1) % 4]))
        });
        match found {
            Some(i) => self.transfer(
                id,
                Layer::Face(cycle[i]),
                Layer::Face(cycle[(i + 2) % 4]),
            ),
            None => self.broken_membership(id, "piece does not straddle two cycle faces"),
        }
    }

    /// Move a piece on exactly one cycle face to the next face in the cycle
    fn advance_adjacent(&mut self, id: PieceId, cycle: &[Face; 4]) {
        let piece = &self.pieces[id.index()];
        let found = (0..4).find(|&i| piece.in_layer(Layer::Face(cycle[i])));
        match found {
            Some(i) => self.transfer(
                id,
                Layer::Face(cycle[i]),
                Layer::Face(cycle[(i + 1) % 4]),
            ),
            None => self.broken_membership(id, "piece is on no cycle face"),
        }
    }

    /// Remove `id` from `from` and append it to `to`, in the group index and
    /// on the piece itself
    fn transfer(&mut self, id: PieceId, from: Layer, to: Layer) {
        if let Some(group) = self.groups.get_mut(&from) {
            if let Some(pos) = group.iter().position(|&p| p == id) {
                group.remove(pos);
            }
        }
        self.groups.entry(to).or_default().push(id);
        self.pieces[id.index()].replace_layer(from, to);
        trace!("piece {} moved {} -> {}", id.index(), from, to);
    }

    fn broken_membership(&self, id: PieceId, what: &str) -> ! {
        let piece = &self.pieces[id.index()];
        panic!(
            "{}: piece {} at {} with layers {:?}",
            what,
            id.index(),
            piece.coordinates(),
            piece.layers()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    #[test]
    fn test_quarter_turn_four_times_is_identity() {
        for d in 2..=5u8 {
            let taxonomy = crate::taxonomy::MoveTaxonomy::new(d);
            for &layer in taxonomy.layers() {
                for direction in Direction::ALL {
                    let start = Coord::new(0, 1, d - 1);
                    let mut c = start;
                    for _ in 0..4 {
                        c = quarter_turn(c, layer, direction, d);
                    }
                    assert_eq!(c, start);
                }
            }
        }
    }

    #[test]
    fn test_quarter_turn_keeps_layer_coordinate() {
        let layer = Layer::Slice(Axis::BlueGreen, 2);
        let c = quarter_turn(Coord::new(1, 2, 0), layer, Direction::Cw, 5);
        assert_eq!(c.get(Axis::BlueGreen), 2);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let c = Coord::new(0, 1, 3);
        for face in Face::ALL {
            let layer = Layer::Face(face);
            let there = quarter_turn(c, layer, Direction::Cw, 4);
            assert_eq!(quarter_turn(there, layer, Direction::Ccw, 4), c);
        }
    }

    #[test]
    fn test_w_clockwise_corner_path() {
        // W cw sends B-R corner to R-G and onwards around the cycle
        let w = Layer::Face(Face::W);
        let c = quarter_turn(Coord::new(0, 0, 0), w, Direction::Cw, 3);
        assert_eq!(c, Coord::new(0, 2, 0));
        let c = quarter_turn(c, w, Direction::Cw, 3);
        assert_eq!(c, Coord::new(0, 2, 2));
    }

    #[test]
    fn test_opposite_faces_turn_opposite_ways() {
        // Y is viewed from the other side, so its clockwise turn runs the
        // other way around the shared axis
        let c = Coord::new(2, 0, 0);
        assert_eq!(
            quarter_turn(c, Layer::Face(Face::Y), Direction::Cw, 3),
            Coord::new(2, 0, 2)
        );
        assert_eq!(
            quarter_turn(c, Layer::Slice(Axis::WhiteYellow, 1), Direction::Cw, 3),
            Coord::new(2, 2, 0)
        );
    }
}
