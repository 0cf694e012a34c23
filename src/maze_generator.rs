//! Maze generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::error::MazeResult;
use crate::grid::{Cell, Grid, Point};

/// Maze generator with its own random state.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a perfect maze (exactly one route between any two open
    /// squares), carved from the top left corner.
    ///
    /// Returns error if either dimension is zero.
    pub fn generate(&mut self, width: usize, height: usize) -> MazeResult<Grid> {
        generate_with(width, height, &mut self.random)
    }
}

/// Carve a maze with an iterative recursive backtracker.
///
/// Corridors run between squares two steps apart, starting from (0, 0), so
/// open squares sit on even coordinates and the squares between them are
/// opened only when a corridor passes through.
pub fn generate_with<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    random: &mut R,
) -> MazeResult<Grid> {
    let mut grid = Grid::new(width, height)?;

    let origin = Point::new(0, 0);
    grid.set(origin, Cell::Open)?;
    let mut stack = vec![origin];
    let mut carved = 1;

    while let Some(&current) = stack.last() {
        let candidates: Vec<Point> = grid
            .neighbours(current, 2)
            .filter(|p| !grid.is_open(*p))
            .collect();

        if let Some(&next) = candidates.choose(random) {
            // Remove wall between current cell and neighbour
            let between = Point::new((current.x + next.x) / 2, (current.y + next.y) / 2);
            grid.set(between, Cell::Open)?;
            grid.set(next, Cell::Open)?;
            stack.push(next);
            carved += 1;
        } else {
            stack.pop();
        }
    }

    debug!(width, height, carved, "Generated maze");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use crate::error::MazeError;
    use crate::grid::{Grid, Point};
    use crate::maze_generator::MazeGenerator;

    /// Open squares reachable from `start` by flood fill
    fn reachable(grid: &Grid, start: Point) -> HashSet<Point> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in grid.neighbours(p, 1).filter(|n| grid.is_open(*n)) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    #[test]
    fn every_open_square_is_reachable_from_origin() {
        for (seed, width, height) in [(0, 2, 2), (1, 5, 5), (2, 40, 30), (3, 15, 19), (4, 7, 2)] {
            let grid = MazeGenerator::new(Some(seed))
                .generate(width, height)
                .unwrap();
            let open: HashSet<Point> = grid.open_points().collect();
            assert_eq!(reachable(&grid, Point::new(0, 0)), open, "seed {seed}");
        }
    }

    #[test]
    fn carved_maze_is_a_tree() {
        let grid = MazeGenerator::new(Some(7)).generate(21, 15).unwrap();
        let open: Vec<Point> = grid.open_points().collect();
        let edges: usize = open
            .iter()
            .map(|p| grid.neighbours(*p, 1).filter(|n| grid.is_open(*n)).count())
            .sum::<usize>()
            / 2;
        assert_eq!(edges, open.len() - 1);
    }

    #[test]
    fn all_even_lattice_squares_are_visited() {
        let grid = MazeGenerator::new(Some(11)).generate(9, 7).unwrap();
        for y in (0..7).step_by(2) {
            for x in (0..9).step_by(2) {
                assert!(grid.is_open(Point::new(x, y)), "({x}, {y}) not carved");
            }
        }
        // Odd-odd squares are never on a corridor
        assert!(!grid.is_open(Point::new(1, 1)));
        assert!(!grid.is_open(Point::new(7, 5)));
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let a = MazeGenerator::new(Some(42)).generate(40, 30).unwrap();
        let b = MazeGenerator::new(Some(42)).generate(40, 30).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_emojis(), b.to_emojis());
    }

    #[test]
    fn single_column_or_row_carves_along_remaining_axis() {
        let single = MazeGenerator::new(Some(0)).generate(1, 1).unwrap();
        assert_eq!(single.open_points().count(), 1);

        let column = MazeGenerator::new(Some(0)).generate(1, 5).unwrap();
        assert_eq!(column.open_points().count(), 5);

        let row = MazeGenerator::new(Some(0)).generate(2, 1).unwrap();
        assert_eq!(row.open_points().collect::<Vec<_>>(), vec![Point::new(0, 0)]);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            MazeGenerator::new(Some(0)).generate(3, 0),
            Err(MazeError::InvalidDimensions {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn generated_maze_parses_back() {
        let grid = MazeGenerator::new(Some(0)).generate(15, 19).unwrap();
        assert_eq!(Grid::parse(&grid.to_emojis()).unwrap(), grid);
    }
}
