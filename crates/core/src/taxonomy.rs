//! Move taxonomy - which layers exist and how a turn cycles the rest
//!
//! For every turn the engine needs two kinds of lookup:
//!
//! - **Outer cycle**: the four faces adjacent to the turning layer, in the
//!   order pieces and stickers advance through them.
//! - **Auxiliary cycles**: for pieces that sit in inner slices, how those
//!   slice memberships move. Three tables cover this:
//!   - `outer_to_inner`: an outer face turn moving edges between slices
//!   - `inner_to_inner`: a slice turn moving centers between perpendicular slices
//!   - `center_pairs`: an outer face turn moving a center's pair of slices
//!
//! The auxiliary tables are derived from the coordinate quarter turn, so the
//! memberships they produce always agree with where the piece lands.

use std::collections::{HashMap, HashSet};

use crate::rotation::quarter_turn;
use crate::types::{Axis, Coord, Direction, Face, Layer, Move};

/// Adjacent faces of each face, in clockwise order
const CLOCKWISE_CYCLES: [(Face, [Face; 4]); 6] = [
    (Face::W, [Face::B, Face::R, Face::G, Face::O]),
    (Face::B, [Face::W, Face::O, Face::Y, Face::R]),
    (Face::O, [Face::W, Face::G, Face::Y, Face::B]),
    (Face::G, [Face::W, Face::R, Face::Y, Face::O]),
    (Face::R, [Face::W, Face::B, Face::Y, Face::G]),
    (Face::Y, [Face::B, Face::O, Face::G, Face::R]),
];

/// Faces visited by stickers and pieces when `layer` turns
///
/// Slices follow the cycle of their axis' low face. A counter-clockwise
/// cycle is the clockwise one walked backwards from the same start.
///
/// # Examples
///
/// ```
/// use cubesim_core::taxonomy::outer_cycle;
/// use cubesim_core::types::{Direction, Face, Layer};
///
/// let w = Layer::Face(Face::W);
/// assert_eq!(outer_cycle(w, Direction::Cw), [Face::B, Face::R, Face::G, Face::O]);
/// assert_eq!(outer_cycle(w, Direction::Ccw), [Face::B, Face::O, Face::G, Face::R]);
/// ```
pub fn outer_cycle(layer: Layer, direction: Direction) -> [Face; 4] {
    let face = layer.cycle_face();
    let cw = CLOCKWISE_CYCLES
        .iter()
        .find(|(f, _)| *f == face)
        .map(|(_, cycle)| *cycle)
        .unwrap_or([face; 4]);
    match direction {
        Direction::Cw => cw,
        Direction::Ccw => [cw[0], cw[3], cw[2], cw[1]],
    }
}

/// A 4-cycle: each item is replaced by the next one, wrapping around
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<T>([T; 4]);

impl<T: Copy + PartialEq> Cycle<T> {
    pub fn new(items: [T; 4]) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[T; 4] {
        &self.0
    }

    pub fn contains(&self, item: T) -> bool {
        self.0.contains(&item)
    }

    pub fn successor(&self, item: T) -> Option<T> {
        let i = self.0.iter().position(|&x| x == item)?;
        Some(self.0[(i + 1) % 4])
    }
}

/// A set of 4-cycles
///
/// A cycle may be listed more than once under a different starting point; all
/// listings agree on every successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable<T> {
    cycles: Vec<Cycle<T>>,
}

impl<T: Copy + PartialEq> CycleTable<T> {
    pub fn cycles(&self) -> &[Cycle<T>] {
        &self.cycles
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Where `item` goes, or `None` if no cycle mentions it
    pub fn successor(&self, item: T) -> Option<T> {
        self.cycles.iter().find_map(|c| c.successor(item))
    }
}

impl<T> Default for CycleTable<T> {
    fn default() -> Self {
        Self { cycles: Vec::new() }
    }
}

/// Slices of a center piece, ordered by the free axes of the face it sits on
pub type SlicePair = (Layer, Layer);

/// Layer list and cycle tables for one cube dimension
#[derive(Debug, Clone)]
pub struct MoveTaxonomy {
    dimension: u8,
    layers: Vec<Layer>,
    outer_to_inner: HashMap<(Face, Direction), CycleTable<Layer>>,
    inner_to_inner: HashMap<(Axis, Direction), CycleTable<Layer>>,
    center_pairs: HashMap<(Face, Direction), CycleTable<SlicePair>>,
}

impl MoveTaxonomy {
    pub fn new(dimension: u8) -> Self {
        let mut layers: Vec<Layer> = Face::ALL.into_iter().map(Layer::Face).collect();
        for axis in Axis::ALL {
            for index in 1..dimension.saturating_sub(1) {
                layers.push(Layer::Slice(axis, index));
            }
        }

        let mut outer_to_inner = HashMap::new();
        let mut center_pairs = HashMap::new();
        let mut inner_to_inner = HashMap::new();
        for direction in Direction::ALL {
            for face in Face::ALL {
                let layer = Layer::Face(face);
                outer_to_inner.insert((face, direction), slice_cycles(layer, direction, dimension));
                center_pairs.insert((face, direction), pair_cycles(face, direction, dimension));
            }
            for axis in Axis::ALL {
                // Every slice of an axis cycles the same perpendicular slices
                let table = if dimension > 2 {
                    slice_cycles(Layer::Slice(axis, 1), direction, dimension)
                } else {
                    CycleTable::default()
                };
                inner_to_inner.insert((axis, direction), table);
            }
        }

        Self {
            dimension,
            layers,
            outer_to_inner,
            inner_to_inner,
            center_pairs,
        }
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Every rotatable layer: the six faces, then slices per axis
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn outer_layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.iter().copied().filter(|l| !l.is_slice())
    }

    pub fn inner_layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.iter().copied().filter(Layer::is_slice)
    }

    pub fn has_layer(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// Every legal move, both directions of every layer
    pub fn moves(&self) -> Vec<Move> {
        self.layers
            .iter()
            .flat_map(|&layer| Direction::ALL.map(|d| Move::new(layer, d)))
            .collect()
    }

    /// Both directions of the six face turns
    pub fn outer_moves(&self) -> Vec<Move> {
        self.outer_layers()
            .flat_map(|layer| Direction::ALL.map(|d| Move::new(layer, d)))
            .collect()
    }

    pub fn outer_to_inner(&self, face: Face, direction: Direction) -> Option<&CycleTable<Layer>> {
        self.outer_to_inner.get(&(face, direction))
    }

    pub fn inner_to_inner(&self, axis: Axis, direction: Direction) -> Option<&CycleTable<Layer>> {
        self.inner_to_inner.get(&(axis, direction))
    }

    pub fn center_pairs(&self, face: Face, direction: Direction) -> Option<&CycleTable<SlicePair>> {
        self.center_pairs.get(&(face, direction))
    }

    /// Pivot point of a layer's turn, in grid units
    ///
    /// The grid center on the two free axes, the layer's depth on its own.
    pub fn rotation_origin(&self, layer: Layer) -> [f32; 3] {
        let mid = (self.dimension as f32 - 1.0) / 2.0;
        let mut origin = [mid; 3];
        origin[layer.axis().index()] = layer.depth(self.dimension) as f32;
        origin
    }
}

/// The slice that an edge-type cell occupies on the free axes of `axis`
fn free_slice(cell: Coord, axis: Axis, dimension: u8) -> Layer {
    let (a, b) = axis.free_axes();
    let first = cell.layer(a, dimension);
    if first.is_slice() {
        first
    } else {
        cell.layer(b, dimension)
    }
}

/// Slice cycles traced by the edge cells of `layer` as it turns.
///
/// Starts from each cell on the border with the first face of the outer
/// cycle and follows it through four quarter turns.
fn slice_cycles(layer: Layer, direction: Direction, dimension: u8) -> CycleTable<Layer> {
    let axis = layer.axis();
    let first = outer_cycle(layer, direction)[0];
    let (a, b) = axis.free_axes();
    let along = if a == first.axis() { b } else { a };

    let mut cycles = Vec::new();
    for k in 1..dimension.saturating_sub(1) {
        let mut cell = Coord::default();
        cell.set(axis, layer.depth(dimension));
        cell.set(first.axis(), first.depth(dimension));
        cell.set(along, k);

        let items = std::array::from_fn(|_| {
            let slice = free_slice(cell, axis, dimension);
            cell = quarter_turn(cell, layer, direction, dimension);
            slice
        });
        cycles.push(Cycle::new(items));
    }
    CycleTable { cycles }
}

/// Slice-pair cycles traced by the center cells of `face` as it turns
fn pair_cycles(face: Face, direction: Direction, dimension: u8) -> CycleTable<SlicePair> {
    let layer = Layer::Face(face);
    let (a, b) = face.axis().free_axes();
    let inner = 1..dimension.saturating_sub(1);

    let mut visited = HashSet::new();
    let mut cycles = Vec::new();
    for i in inner.clone() {
        for j in inner.clone() {
            let mut cell = Coord::default();
            cell.set(face.axis(), face.depth(dimension));
            cell.set(a, i);
            cell.set(b, j);
            if visited.contains(&cell) {
                continue;
            }

            let items = std::array::from_fn(|_| {
                visited.insert(cell);
                let pair = (cell.layer(a, dimension), cell.layer(b, dimension));
                cell = quarter_turn(cell, layer, direction, dimension);
                pair
            });
            cycles.push(Cycle::new(items));
        }
    }
    CycleTable { cycles }
}
