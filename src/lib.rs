pub mod generator;
pub mod grid;
pub mod render;
pub mod tracker;

pub use generator::{GenerateError, Generator, PuzzlePair};
pub use grid::{Grid, Pos};
pub use tracker::Tracker;
