//! # maze_pathfinding
//!
//! Grid-based maze solving. Parses a text maze description into an immutable
//! [GridMap], finds a shortest path from start to goal with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) under the
//! Manhattan-distance heuristic (4-connected, uniform-cost moves), and
//! renders the grid with its solution as text or as a raster image.
//!
//! The search keeps superseded frontier entries queued and discards them
//! lazily, and breaks priority ties by insertion order, so identical inputs
//! always produce identical output.

pub mod grid;
pub mod parser;
pub mod render;
pub mod search;

pub use grid::{Cell, Direction, GridMap, InvalidMazeError};
pub use search::{solve, SearchResult};
