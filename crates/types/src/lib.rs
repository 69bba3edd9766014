//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary used throughout the simulator: faces,
//! axes, layers, moves and piece kinds. All types are plain data with no
//! behaviour beyond notation and small lookups, making them usable by the
//! rotation engine as well as by any renderer or input layer built on top.
//!
//! # Grid Coordinates
//!
//! A cube of dimension `d` is a `d x d x d` grid. Each axis pairs two opposite
//! faces, one at coordinate `0` (the "low" face) and one at `d - 1`:
//!
//! | Axis | Index | Low face (0) | High face (d-1) | Slice labels |
//! |------|-------|--------------|-----------------|--------------|
//! | `WhiteYellow` | x | `W` | `Y` | `W#Y1 ..` |
//! | `BlueGreen` | y | `B` | `G` | `B#G1 ..` |
//! | `RedOrange` | z | `R` | `O` | `R#O1 ..` |
//!
//! Inner slices exist for coordinates `1 ..= d - 2`.
//!
//! # Examples
//!
//! ```
//! use cubesim_types::{Axis, Direction, Face, Layer, Move};
//!
//! let layer: Layer = "W#Y1".parse().unwrap();
//! assert_eq!(layer, Layer::Slice(Axis::WhiteYellow, 1));
//!
//! let mv: Move = "B'".parse().unwrap();
//! assert_eq!(mv, Move::new(Layer::Face(Face::B), Direction::Ccw));
//! assert_eq!(mv.to_string(), "B|ccw");
//!
//! assert_eq!(Face::W.opposite(), Face::Y);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest supported cube dimension (2x2x2)
pub const MIN_DIMENSION: u8 = 2;

/// Largest supported cube dimension (5x5x5)
pub const MAX_DIMENSION: u8 = 5;

/// Dimension used when a caller does not pick one
pub const DEFAULT_DIMENSION: u8 = 3;

/// Number of moves in a default scramble
pub const DEFAULT_SHUFFLE_MOVES: usize = 40;

/// Errors produced while parsing cube notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty move")]
    Empty,
    #[error("unknown face '{0}'")]
    UnknownFace(String),
    #[error("unknown layer '{0}'")]
    UnknownLayer(String),
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
}

/// The six face colors
///
/// - **W**: White, low end of the x axis
/// - **Y**: Yellow, high end of the x axis
/// - **B**: Blue, low end of the y axis
/// - **G**: Green, high end of the y axis
/// - **R**: Red, low end of the z axis
/// - **O**: Orange, high end of the z axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    W,
    R,
    O,
    Y,
    G,
    B,
}

impl Face {
    /// All faces, in the order rotation groups are listed.
    pub const ALL: [Face; 6] = [Face::W, Face::B, Face::O, Face::G, Face::R, Face::Y];

    /// Parse a face from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesim_types::Face;
    ///
    /// assert_eq!(Face::from_char('w'), Some(Face::W));
    /// assert_eq!(Face::from_char('O'), Some(Face::O));
    /// assert_eq!(Face::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Face::W),
            'R' => Some(Face::R),
            'O' => Some(Face::O),
            'Y' => Some(Face::Y),
            'G' => Some(Face::G),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Upper-case letter for this face
    pub fn as_char(&self) -> char {
        match self {
            Face::W => 'W',
            Face::R => 'R',
            Face::O => 'O',
            Face::Y => 'Y',
            Face::G => 'G',
            Face::B => 'B',
        }
    }

    /// Human-readable color name
    pub fn name(&self) -> &'static str {
        match self {
            Face::W => "white",
            Face::R => "red",
            Face::O => "orange",
            Face::Y => "yellow",
            Face::G => "green",
            Face::B => "blue",
        }
    }

    /// Axis this face sits on
    pub fn axis(&self) -> Axis {
        match self {
            Face::W | Face::Y => Axis::WhiteYellow,
            Face::B | Face::G => Axis::BlueGreen,
            Face::R | Face::O => Axis::RedOrange,
        }
    }

    /// True for the faces at coordinate 0 of their axis (W, B, R)
    pub fn is_low(&self) -> bool {
        matches!(self, Face::W | Face::B | Face::R)
    }

    /// The face on the other side of the cube
    pub fn opposite(&self) -> Self {
        match self {
            Face::W => Face::Y,
            Face::Y => Face::W,
            Face::B => Face::G,
            Face::G => Face::B,
            Face::R => Face::O,
            Face::O => Face::R,
        }
    }

    /// Coordinate of this face along its axis for a cube of the given dimension
    pub fn depth(&self, dimension: u8) -> u8 {
        if self.is_low() {
            0
        } else {
            dimension - 1
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The three rotation axes, each named after the pair of faces it joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    WhiteYellow,
    BlueGreen,
    RedOrange,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::WhiteYellow, Axis::BlueGreen, Axis::RedOrange];

    /// Index of this axis into a coordinate triple
    pub fn index(&self) -> usize {
        match self {
            Axis::WhiteYellow => 0,
            Axis::BlueGreen => 1,
            Axis::RedOrange => 2,
        }
    }

    /// Face at coordinate 0
    pub fn low(&self) -> Face {
        match self {
            Axis::WhiteYellow => Face::W,
            Axis::BlueGreen => Face::B,
            Axis::RedOrange => Face::R,
        }
    }

    /// Face at coordinate `d - 1`
    pub fn high(&self) -> Face {
        self.low().opposite()
    }

    /// The two other axes in right-handed order.
    ///
    /// A positive quarter turn about `self` sends the first free axis towards
    /// the second.
    pub fn free_axes(&self) -> (Axis, Axis) {
        match self {
            Axis::WhiteYellow => (Axis::BlueGreen, Axis::RedOrange),
            Axis::BlueGreen => (Axis::RedOrange, Axis::WhiteYellow),
            Axis::RedOrange => (Axis::WhiteYellow, Axis::BlueGreen),
        }
    }

    /// Slice label prefix, e.g. `W#Y`
    pub fn slice_prefix(&self) -> &'static str {
        match self {
            Axis::WhiteYellow => "W#Y",
            Axis::BlueGreen => "B#G",
            Axis::RedOrange => "R#O",
        }
    }

    fn from_slice_prefix(s: &str) -> Option<Self> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.slice_prefix().eq_ignore_ascii_case(s))
    }
}

/// Turn direction, as seen looking at the layer's low face (or at the face
/// itself for outer layers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Cw,
    Ccw,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Cw, Direction::Ccw];

    /// The opposite turn direction
    pub fn inverse(&self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts "cw" | "clockwise" and "ccw" | "counterclockwise".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cw" | "clockwise" => Some(Direction::Cw),
            "ccw" | "counterclockwise" => Some(Direction::Ccw),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Cw => "cw",
            Direction::Ccw => "ccw",
        }
    }
}

/// A rotatable layer: one of the six outer faces or an inner slice
///
/// `Slice(axis, k)` is the slab at coordinate `k` along `axis`, valid for
/// `1 <= k <= d - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Layer {
    Face(Face),
    Slice(Axis, u8),
}

impl Layer {
    /// Axis the layer turns about
    pub fn axis(&self) -> Axis {
        match self {
            Layer::Face(face) => face.axis(),
            Layer::Slice(axis, _) => *axis,
        }
    }

    /// Coordinate of this layer along its axis
    pub fn depth(&self, dimension: u8) -> u8 {
        match self {
            Layer::Face(face) => face.depth(dimension),
            Layer::Slice(_, index) => *index,
        }
    }

    /// The layer containing cells whose `axis` coordinate is `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesim_types::{Axis, Face, Layer};
    ///
    /// assert_eq!(Layer::at(Axis::BlueGreen, 0, 4), Layer::Face(Face::B));
    /// assert_eq!(Layer::at(Axis::BlueGreen, 2, 4), Layer::Slice(Axis::BlueGreen, 2));
    /// assert_eq!(Layer::at(Axis::BlueGreen, 3, 4), Layer::Face(Face::G));
    /// ```
    pub fn at(axis: Axis, value: u8, dimension: u8) -> Self {
        if value == 0 {
            Layer::Face(axis.low())
        } else if value + 1 >= dimension {
            Layer::Face(axis.high())
        } else {
            Layer::Slice(axis, value)
        }
    }

    pub fn is_slice(&self) -> bool {
        matches!(self, Layer::Slice(..))
    }

    /// Whether this layer exists on a cube of the given dimension
    pub fn exists_in(&self, dimension: u8) -> bool {
        match self {
            Layer::Face(_) => dimension >= MIN_DIMENSION,
            Layer::Slice(_, index) => *index >= 1 && *index + 2 <= dimension,
        }
    }

    /// Sign convention for quarter turns.
    ///
    /// R, W, B and every inner slice turn with the opposite angle sign from
    /// O, Y and G for the same requested direction.
    pub fn is_negative(&self) -> bool {
        match self {
            Layer::Face(face) => face.is_low(),
            Layer::Slice(..) => true,
        }
    }

    /// Face whose adjacency cycle drives this layer: the face itself, or the
    /// low face of a slice's axis
    pub fn cycle_face(&self) -> Face {
        match self {
            Layer::Face(face) => *face,
            Layer::Slice(axis, _) => axis.low(),
        }
    }

    /// Unit rotation axis in the renderer's frame
    ///
    /// Opposite faces share a direction with opposite sign; slices share the
    /// axis of their low face.
    pub fn rotation_axis(&self) -> [i8; 3] {
        match self.cycle_face() {
            Face::W => [0, 1, 0],
            Face::Y => [0, -1, 0],
            Face::B => [0, 0, 1],
            Face::G => [0, 0, -1],
            Face::O => [1, 0, 0],
            Face::R => [-1, 0, 0],
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Face(face) => write!(f, "{}", face),
            Layer::Slice(axis, index) => write!(f, "{}{}", axis.slice_prefix(), index),
        }
    }
}

impl FromStr for Layer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Face::from_char(c)
                .map(Layer::Face)
                .ok_or_else(|| ParseError::UnknownFace(s.to_string()));
        }

        if s.len() > 3 && s.is_char_boundary(3) {
            let (prefix, index) = s.split_at(3);
            if let (Some(axis), Ok(index)) = (Axis::from_slice_prefix(prefix), index.parse::<u8>()) {
                if index >= 1 {
                    return Ok(Layer::Slice(axis, index));
                }
            }
        }

        Err(ParseError::UnknownLayer(s.to_string()))
    }
}

impl From<Layer> for String {
    fn from(value: Layer) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Layer {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single quarter turn of one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub layer: Layer,
    pub direction: Direction,
}

impl Move {
    pub fn new(layer: Layer, direction: Direction) -> Self {
        Self { layer, direction }
    }

    /// Clockwise turn of an outer face
    pub fn cw(face: Face) -> Self {
        Self::new(Layer::Face(face), Direction::Cw)
    }

    /// Counter-clockwise turn of an outer face
    pub fn ccw(face: Face) -> Self {
        Self::new(Layer::Face(face), Direction::Ccw)
    }

    /// The move that undoes this one
    pub fn inverse(&self) -> Self {
        Self::new(self.layer, self.direction.inverse())
    }

    /// Map a key press to a face turn.
    ///
    /// A lower-case face letter turns that face clockwise; the upper-case
    /// (shifted) letter turns it counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesim_types::{Face, Move};
    ///
    /// assert_eq!(Move::from_keypress('r'), Some(Move::cw(Face::R)));
    /// assert_eq!(Move::from_keypress('R'), Some(Move::ccw(Face::R)));
    /// assert_eq!(Move::from_keypress('q'), None);
    /// ```
    pub fn from_keypress(key: char) -> Option<Self> {
        let face = Face::from_char(key)?;
        if key.is_ascii_uppercase() {
            Some(Self::ccw(face))
        } else {
            Some(Self::cw(face))
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.layer, self.direction.as_str())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts `W|cw`, `W#Y1|ccw`, and the shorthand `W`, `W'`, `W#Y1'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some((layer, direction)) = s.split_once('|') {
            let direction = Direction::from_str(direction.trim())
                .ok_or_else(|| ParseError::UnknownDirection(direction.trim().to_string()))?;
            return Ok(Self::new(layer.parse()?, direction));
        }

        match s.strip_suffix('\'') {
            Some(layer) => Ok(Self::new(layer.parse()?, Direction::Ccw)),
            None => Ok(Self::new(s.parse()?, Direction::Cw)),
        }
    }
}

/// Parse a whitespace-separated move sequence
///
/// # Examples
///
/// ```
/// use cubesim_types::{parse_sequence, Face, Move};
///
/// let moves = parse_sequence("W R' B|cw").unwrap();
/// assert_eq!(moves, vec![Move::cw(Face::W), Move::ccw(Face::R), Move::cw(Face::B)]);
/// assert!(parse_sequence("W Q").is_err());
/// ```
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Piece category, determined by how many stickers a piece carries
///
/// - **Corner**: 3 stickers, member of 3 outer layers
/// - **Edge**: 2 stickers, member of 2 outer layers and 1 inner slice
/// - **Center**: 1 sticker, member of 1 outer layer and 2 inner slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Corner,
    Edge,
    Center,
}

impl PieceKind {
    pub fn from_color_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(PieceKind::Corner),
            2 => Some(PieceKind::Edge),
            1 => Some(PieceKind::Center),
            _ => None,
        }
    }

    pub fn color_count(&self) -> usize {
        match self {
            PieceKind::Corner => 3,
            PieceKind::Edge => 2,
            PieceKind::Center => 1,
        }
    }

    /// Number of outer layers a piece of this kind belongs to
    pub fn outer_layer_count(&self) -> usize {
        self.color_count()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Corner => "corner",
            PieceKind::Edge => "edge",
            PieceKind::Center => "center",
        }
    }
}

/// Notable transitions, consumed by observers via `take_event`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CubeEvent {
    /// A scramble finished
    Shuffled { moves: usize },
    /// The cube came back to solved after a scramble
    Solved { moves_since_shuffle: u32 },
}

/// A grid cell `(x, y, z)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub [u8; 3]);

impl Coord {
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self([x, y, z])
    }

    pub fn get(&self, axis: Axis) -> u8 {
        self.0[axis.index()]
    }

    pub fn set(&mut self, axis: Axis, value: u8) {
        self.0[axis.index()] = value;
    }

    /// Layer this cell belongs to along `axis`
    pub fn layer(&self, axis: Axis, dimension: u8) -> Layer {
        Layer::at(axis, self.get(axis), dimension)
    }

    /// `"xyz"` key used by the coordinate index
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesim_types::Coord;
    ///
    /// assert_eq!(Coord::new(0, 2, 1).key(), "021");
    /// assert_eq!(Coord::from_key("021"), Some(Coord::new(0, 2, 1)));
    /// assert_eq!(Coord::from_key("0x1"), None);
    /// ```
    pub fn key(&self) -> String {
        format!("{}{}{}", self.0[0], self.0[1], self.0[2])
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let mut digits = key.chars().map(|c| c.to_digit(10).map(|d| d as u8));
        let x = digits.next()??;
        let y = digits.next()??;
        let z = digits.next()??;
        if digits.next().is_some() {
            return None;
        }
        Some(Self::new(x, y, z))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
