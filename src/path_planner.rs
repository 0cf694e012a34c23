//! Shortest paths with A* search

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::error::MazeResult;
use crate::grid::{Grid, Point};

/// Squares from start to end, both included. Empty if there is no route.
pub type Path = Vec<Point>;

/// Open set entry
#[derive(PartialEq, Eq, Debug)]
struct Candidate {
    /// Estimated total cost `g + h`
    f: usize,
    /// Cost from start
    g: usize,
    /// Insertion order, breaks remaining ties
    seq: usize,
    point: Point,
}

impl Ord for Candidate {
    // Reversed, so that the max-heap pops the lowest f first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest path from `start` to `end` through open squares.
///
/// Uses A* with the Manhattan distance as heuristic, moving one square at a
/// time in the four cardinal directions. An unreachable `end` gives an empty
/// path; a `start` or `end` outside the grid is an error.
///
/// # Examples
/// ```
/// use maze_walker::{find_path, Grid, Point};
///
/// let grid = Grid::parse("
/// 🟩🟩🟩
/// 🟫🟫🟩
/// 🟩🟩🟩").unwrap();
/// let path = find_path(&grid, Point::new(0, 0), Point::new(0, 2)).unwrap();
/// assert_eq!(path.len(), 7);
/// ```
pub fn find_path(grid: &Grid, start: Point, end: Point) -> MazeResult<Path> {
    grid.check_bounds(start)?;
    grid.check_bounds(end)?;

    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut g_score: HashMap<Point, usize> = HashMap::from([(start, 0)]);
    let mut seq = 0;

    open.push(Candidate {
        f: start.manhattan(end),
        g: 0,
        seq,
        point: start,
    });

    while let Some(Candidate { g, point, .. }) = open.pop() {
        if point == end {
            let path = reconstruct(&came_from, end);
            debug!(%start, %end, steps = path.len() - 1, "Found path");
            return Ok(path);
        }

        // Stale entry, a cheaper route was queued later
        if g_score.get(&point).is_some_and(|&best| g > best) {
            continue;
        }

        for neighbour in grid.neighbours(point, 1) {
            if !grid.is_open(neighbour) {
                continue;
            }
            let tentative = g + 1;
            if g_score.get(&neighbour).map_or(true, |&best| tentative < best) {
                came_from.insert(neighbour, point);
                g_score.insert(neighbour, tentative);
                seq += 1;
                open.push(Candidate {
                    f: tentative + neighbour.manhattan(end),
                    g: tentative,
                    seq,
                    point: neighbour,
                });
            }
        }
    }

    debug!(%start, %end, explored = g_score.len(), "No path");
    Ok(Vec::new())
}

/// Follow predecessor links back from `end`, then reverse.
fn reconstruct(came_from: &HashMap<Point, Point>, end: Point) -> Path {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
