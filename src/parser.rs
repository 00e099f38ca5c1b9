//! Parser for the maze text format.
//!
//! The format is a block of lines where:
//! - `'A'` marks the unique start and `'B'` the unique goal
//! - `' '` (space) marks a passable cell
//! - any other character marks a wall
//!
//! The grid is as tall as the number of lines and as wide as the longest
//! line. Positions past the end of a shorter line are passable, not wall;
//! ragged input is a supported fill policy, not an error.

use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::grid::{Cell, GridMap, InvalidMazeError};

/// Error type for loading a maze from a file.
#[derive(Debug, Error)]
pub enum MazeFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidMazeError),
}

/// Parses a maze description into a [GridMap].
pub fn parse(text: &str) -> Result<GridMap, InvalidMazeError> {
    let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(InvalidMazeError::EmptyGrid { height, width });
    }

    let mut starts = Vec::new();
    let mut goals = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            match ch {
                'A' => starts.push(Cell::new(row, col)),
                'B' => goals.push(Cell::new(row, col)),
                _ => {}
            }
        }
    }
    let &[start] = starts.as_slice() else {
        return Err(InvalidMazeError::StartCount(starts.len()));
    };
    let &[goal] = goals.as_slice() else {
        return Err(InvalidMazeError::GoalCount(goals.len()));
    };

    GridMap::new(
        height,
        width,
        |cell| {
            rows[cell.row]
                .get(cell.col)
                .is_some_and(|&ch| !matches!(ch, 'A' | 'B' | ' '))
        },
        start,
        goal,
    )
}

/// Reads and parses a maze description file.
pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<GridMap, MazeFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let map = parse(&text)?;
    info!(
        "loaded {}x{} maze from {}",
        map.height(),
        map.width(),
        path.display()
    );
    Ok(map)
}
