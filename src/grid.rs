//! The grid model: cells, move directions and the immutable maze layout.

use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use thiserror::Error;

/// A position on the grid, row-major with `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to another cell,
    /// which on a 4-connected uniform-cost grid never overestimates the true path cost.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move between two axis-aligned adjacent cells.
///
/// The order of [Direction::ALL] is the order in which [GridMap::neighbors]
/// generates successors. Equal-priority frontier entries pop in insertion
/// order, so this ordering fixes which of several shortest paths is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Raised when a maze description violates the construction invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidMazeError {
    #[error("maze must have exactly one start marker 'A', found {0}")]
    StartCount(usize),
    #[error("maze must have exactly one goal marker 'B', found {0}")]
    GoalCount(usize),
    #[error("maze dimensions are degenerate ({height}x{width})")]
    EmptyGrid { height: usize, width: usize },
    #[error("start and goal must be distinct cells, both are {0}")]
    StartEqualsGoal(Cell),
    #[error("endpoint {0} is out of bounds or on a wall")]
    BlockedEndpoint(Cell),
}

/// The immutable maze layout: a row-major wall grid backed by a [BoolGrid]
/// ([true] means impassable), plus the distinct passable start and goal cells.
///
/// A [GridMap] exposes no mutation after construction and can be shared
/// read-only across any number of [solve](crate::search::solve) calls.
#[derive(Clone, Debug)]
pub struct GridMap {
    grid: BoolGrid,
    start: Cell,
    goal: Cell,
}

impl GridMap {
    /// Builds a map from dimensions, a wall predicate and the two endpoints.
    ///
    /// Fails if a dimension is zero, if start and goal coincide, or if an
    /// endpoint is out of bounds or marked as wall by the predicate.
    pub fn new<F>(
        height: usize,
        width: usize,
        is_wall: F,
        start: Cell,
        goal: Cell,
    ) -> Result<GridMap, InvalidMazeError>
    where
        F: Fn(Cell) -> bool,
    {
        if height == 0 || width == 0 {
            return Err(InvalidMazeError::EmptyGrid { height, width });
        }
        if start == goal {
            return Err(InvalidMazeError::StartEqualsGoal(start));
        }
        let mut grid = BoolGrid::new(width, height, false);
        for row in 0..height {
            for col in 0..width {
                if is_wall(Cell::new(row, col)) {
                    grid.set(col, row, true);
                }
            }
        }
        let map = GridMap { grid, start, goal };
        for endpoint in [start, goal] {
            if !map.is_passable(endpoint) {
                return Err(InvalidMazeError::BlockedEndpoint(endpoint));
            }
        }
        Ok(map)
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height() && cell.col < self.width()
    }
    /// Whether the cell is a wall. The cell must be in bounds.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.grid.get(cell.col, cell.row)
    }
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }
    /// Estimated remaining cost from `cell` to the goal: the Manhattan
    /// distance, admissible and consistent for 4-connected unit-cost moves.
    pub fn heuristic(&self, cell: Cell) -> u32 {
        cell.manhattan_distance(&self.goal)
    }

    /// The passable axis-aligned neighbours of `cell`, paired with the move
    /// that reaches them, in the fixed up/down/left/right order.
    pub fn neighbors(&self, cell: Cell) -> Vec<(Direction, Cell)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.step(cell, dir).map(|next| (dir, next)))
            .filter(|(_, next)| !self.is_wall(*next))
            .collect()
    }

    fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let next = match dir {
            Direction::Up => Cell::new(cell.row.checked_sub(1)?, cell.col),
            Direction::Down => Cell::new(cell.row + 1, cell.col),
            Direction::Left => Cell::new(cell.row, cell.col.checked_sub(1)?),
            Direction::Right => Cell::new(cell.row, cell.col + 1),
        };
        self.in_bounds(next).then_some(next)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                let cell = Cell::new(row, col);
                let ch = if self.is_wall(cell) {
                    '#'
                } else if cell == self.start {
                    'A'
                } else if cell == self.goal {
                    'B'
                } else {
                    ' '
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
