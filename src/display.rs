//! Terminal frames for the walk

use crate::grid::{Cell, Grid, Point};

pub const S_AGENT: char = '🏃';
pub const S_START: char = '🚩';
pub const S_END: char = '❎';

/// Draw `grid` with start and end markers and the agent on top.
pub fn frame(grid: &Grid, start: Point, end: Point, agent: Point) -> String {
    grid.render_with(|point, cell| {
        if point == agent {
            S_AGENT
        } else if point == end {
            S_END
        } else if point == start {
            S_START
        } else {
            match cell {
                Cell::Wall => Grid::S_WALL,
                Cell::Open => Grid::S_OPEN,
            }
        }
    })
}

/// Clear the terminal and print `frame` at the top left
pub fn print_frame(frame: &str) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", frame);
}
