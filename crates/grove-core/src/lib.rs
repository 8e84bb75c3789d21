//! Core engine for a balanced two-tile grid puzzle.
//!
//! A board is a rectangle of [`Tile::Tree`] and [`Tile::Grass`] cells obeying
//! two rules: no row or column contains a run of three identical tiles, and
//! every row and column holds exactly as many trees as grass tiles. The
//! [`Generator`] fills a [`Grid`] greedily in row-major order, checks the
//! balance rule over the finished board, and retries until the check passes
//! or the attempt budget runs out.

mod generator;
mod grid;

pub use generator::{GenerateError, Generator, GeneratorConfig, Solution};
pub use grid::{DimensionError, Grid, Tile};
