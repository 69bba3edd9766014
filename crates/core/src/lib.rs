//! Core cube logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle state and the rotation engine for cubes
//! from 2x2x2 to 5x5x5. It has **no dependencies** on rendering or input,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Testable**: Every turn keeps piece memberships and coordinates in step
//! - **Portable**: Can back a 3D renderer, a terminal view, or run headless
//!
//! # Module Structure
//!
//! - [`cube`]: The piece arena, rotation groups, coordinate index, and phases
//! - [`piece`]: Corners, edges and centers with their sticker orientation
//! - [`rotation`]: Integer quarter turns and the membership update per turn
//! - [`taxonomy`]: Legal layers, outer face cycles, and slice cycle tables
//! - [`solved`]: The canonical sticker layout and solved detection
//! - [`shuffle`]: Random scrambles, applied at once or step by step
//! - [`rng`]: Seeded LCG used for scrambles
//! - [`snapshot`]: Serializable copies of the state for observers
//!
//! # Puzzle Rules
//!
//! - **Layers**: six outer faces plus `d - 2` inner slices per axis
//! - **Turns**: a quarter turn, clockwise or counter-clockwise, of one layer
//! - **Solved**: every piece home with every sticker on its own face
//! - **Events**: a solved event fires only once the cube has been scrambled
//!
//! # Example
//!
//! ```
//! use cubesim_core::{Cube, SimpleRng};
//! use cubesim_core::types::{Face, Move};
//!
//! let mut cube = Cube::new(3).unwrap();
//! cube.apply_move(Move::cw(Face::W));
//! assert!(!cube.is_solved());
//! cube.apply_move(Move::ccw(Face::W));
//! assert!(cube.is_solved());
//!
//! // Scrambles are reproducible from their seed
//! let mut rng = SimpleRng::new(12345);
//! let moves = cube.shuffle(&mut rng, 20);
//! assert_eq!(moves.len(), 20);
//!
//! // Undo the scramble to solve it again
//! for mv in moves.iter().rev() {
//!     cube.apply_move(mv.inverse());
//! }
//! assert!(cube.is_solved());
//! ```

pub mod cube;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod shuffle;
pub mod snapshot;
pub mod solved;
pub mod taxonomy;

pub use cubesim_types as types;

// Re-export commonly used types for convenience
pub use cube::{Cube, CubeError, Phase};
pub use piece::{OrientationMap, Piece, PieceId};
pub use rng::SimpleRng;
pub use rotation::quarter_turn;
pub use shuffle::{generate_shuffle, ShuffleConfig};
pub use snapshot::{CubeSnapshot, PhaseSnapshot, PieceSnapshot};
pub use solved::SolvedLayout;
pub use taxonomy::{outer_cycle, Cycle, CycleTable, MoveTaxonomy, SlicePair};
