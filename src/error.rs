//! Errors raised by the maze library

use thiserror::Error;

use crate::grid::Point;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Point {point} is outside of the {width}x{height} maze")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("Unexpected character `{character}` at x={x}, y={y}")]
    UnexpectedCharacter { character: char, x: usize, y: usize },

    #[error("Row {y} has {found} squares, expected {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },

    #[error("Maze contains no squares")]
    EmptyGrid,
}

pub type MazeResult<T> = Result<T, MazeError>;
