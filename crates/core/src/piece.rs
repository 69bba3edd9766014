//! Piece module - the physical cubies of the puzzle
//!
//! A piece owns an immutable set of sticker colors and the mutable state that
//! moves change: its grid cell, the face each sticker currently points at, and
//! the layers it currently belongs to (exactly one per axis).

use arrayvec::ArrayVec;

use crate::types::{Axis, Coord, Face, Layer, PieceKind};

/// Index of a piece in the cube's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl PieceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Mapping from sticker color to the face that sticker currently occupies
///
/// The set of keys is fixed when the piece is created; only values change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrientationMap {
    entries: ArrayVec<(Face, Face), 3>,
}

impl OrientationMap {
    /// Every sticker on its own face
    pub fn identity(colors: &[Face]) -> Self {
        Self {
            entries: colors.iter().take(3).map(|&c| (c, c)).collect(),
        }
    }

    /// Face currently occupied by the sticker of `color`
    pub fn get(&self, color: Face) -> Option<Face> {
        self.entries
            .iter()
            .find(|(sticker, _)| *sticker == color)
            .map(|&(_, face)| face)
    }

    /// `(sticker color, current face)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Face, Face)> + '_ {
        self.entries.iter().copied()
    }

    pub fn colors(&self) -> impl Iterator<Item = Face> + '_ {
        self.entries.iter().map(|&(sticker, _)| sticker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every sticker sits on the face of its own color
    pub fn is_identity(&self) -> bool {
        self.entries.iter().all(|(sticker, face)| sticker == face)
    }

    /// Move every sticker lying on one of the cycle's faces one step along it.
    ///
    /// Stickers on the turning face itself are not in the cycle and stay put.
    pub(crate) fn advance(&mut self, cycle: &[Face; 4]) {
        for (_, face) in self.entries.iter_mut() {
            if let Some(i) = cycle.iter().position(|f| f == face) {
                *face = cycle[(i + 1) % 4];
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        for (sticker, face) in self.entries.iter_mut() {
            *face = *sticker;
        }
    }
}

/// The layers containing `coord`, one per axis
pub fn layers_at(coord: Coord, dimension: u8) -> ArrayVec<Layer, 3> {
    Axis::ALL
        .into_iter()
        .map(|axis| coord.layer(axis, dimension))
        .collect()
}

/// A single cubie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    colors: ArrayVec<Face, 3>,
    home: Coord,
    coordinates: Coord,
    orientation: OrientationMap,
    layers: ArrayVec<Layer, 3>,
}

impl Piece {
    /// Create a piece in its solved position.
    ///
    /// Returns `None` for cells without stickers (the hidden interior).
    pub fn new(home: Coord, orientation: OrientationMap, dimension: u8) -> Option<Self> {
        let kind = PieceKind::from_color_count(orientation.len())?;
        Some(Self {
            kind,
            colors: orientation.colors().collect(),
            home,
            coordinates: home,
            orientation,
            layers: layers_at(home, dimension),
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn colors(&self) -> &[Face] {
        &self.colors
    }

    /// Cell this piece occupies in the solved cube
    pub fn home(&self) -> Coord {
        self.home
    }

    pub fn coordinates(&self) -> Coord {
        self.coordinates
    }

    pub fn orientation(&self) -> &OrientationMap {
        &self.orientation
    }

    /// Layers this piece currently belongs to
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_layer(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// The layer this piece belongs to along `axis`
    pub fn layer_on(&self, axis: Axis) -> Option<Layer> {
        self.layers.iter().copied().find(|l| l.axis() == axis)
    }

    /// First inner slice this piece belongs to, other than along `skip`
    pub fn slice_off_axis(&self, skip: Option<Axis>) -> Option<Layer> {
        self.layers
            .iter()
            .copied()
            .find(|l| l.is_slice() && Some(l.axis()) != skip)
    }

    /// At its home cell with every sticker on its own face
    pub fn is_home(&self) -> bool {
        self.coordinates == self.home && self.orientation.is_identity()
    }

    /// Whether the recorded layers match the current cell
    pub fn layers_consistent(&self, dimension: u8) -> bool {
        let mut expected = layers_at(self.coordinates, dimension);
        let mut actual = self.layers.clone();
        expected.sort();
        actual.sort();
        expected == actual
    }

    pub(crate) fn replace_layer(&mut self, from: Layer, to: Layer) {
        if let Some(pos) = self.layers.iter().position(|&l| l == from) {
            self.layers.remove(pos);
        }
        self.layers.push(to);
    }

    pub(crate) fn set_coordinates(&mut self, coordinates: Coord) {
        self.coordinates = coordinates;
    }

    pub(crate) fn orientation_mut(&mut self) -> &mut OrientationMap {
        &mut self.orientation
    }

    pub(crate) fn reset(&mut self, dimension: u8) {
        self.coordinates = self.home;
        self.orientation.reset();
        self.layers = layers_at(self.home, dimension);
    }
}
