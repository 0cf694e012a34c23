//! Settings for the walk driver

use std::path::PathBuf;
use std::time::Duration;

use crate::grid::Point;

/// Driver settings. Defaults match the classic 40x30 board.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkConfig {
    pub width: usize,
    pub height: usize,
    /// Random seed, entropy when `None`
    pub seed: Option<u64>,
    /// Time between two agent steps
    pub move_interval: Duration,
    /// Time between two drawn frames
    pub frame_length: Duration,
    pub start: Point,
    /// Target square, `None` for the default inset corner
    pub end: Option<Point>,
    /// Read the maze from this file instead of generating one; `-` is stdin
    pub file: Option<PathBuf>,
    pub playback: bool,
}

impl WalkConfig {
    pub const DEFAULT_WIDTH: usize = 40;
    pub const DEFAULT_HEIGHT: usize = 30;
    pub const DEFAULT_MOVE_INTERVAL_MS: u64 = 100;
    pub const DEFAULT_FRAME_LENGTH_MS: u64 = 16;

    /// Configured end, or the square two in from the far corner of a
    /// `width` x `height` maze.
    pub fn end_for(&self, width: usize, height: usize) -> Point {
        self.end.unwrap_or_else(|| default_end(width, height))
    }
}

/// Square two in from the bottom right corner, clamped at zero
pub fn default_end(width: usize, height: usize) -> Point {
    Point::new(width.saturating_sub(2), height.saturating_sub(2))
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            seed: None,
            move_interval: Duration::from_millis(Self::DEFAULT_MOVE_INTERVAL_MS),
            frame_length: Duration::from_millis(Self::DEFAULT_FRAME_LENGTH_MS),
            start: Point::new(0, 0),
            end: None,
            file: None,
            playback: true,
        }
    }
}
