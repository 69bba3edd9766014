//! Cube simulator (workspace facade crate).
//!
//! Re-exports the library crates under `cubesim::{core,types}` and hosts the
//! command-line driver used by the `cubesim` binary.

pub use cubesim_core as core;
pub use cubesim_types as types;

pub mod cli;
