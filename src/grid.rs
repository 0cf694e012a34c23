//! Occupancy grid and its text representation

use std::fmt;

use itertools::Itertools;

use crate::error::{MazeError, MazeResult};

/// Location in the maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Point displaced by `(dx, dy)`, or `None` if it would go below zero.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Manhattan distance `|dx| + |dy|`
    pub fn manhattan(self, other: Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a single square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Wall,
    Open,
}

/// Rectangular maze of walls and open squares
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Squares, indexed `[y][x]`
    squares: Vec<Vec<Cell>>,
}

impl Grid {
    pub const S_WALL: char = '🟫';
    pub const S_OPEN: char = '🟩';
    const A_WALL: char = '#';
    const A_OPEN: char = '.';

    /// Unit steps north, south, west and east
    pub const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    /// Create a grid where every square is a wall.
    ///
    /// Returns error if either dimension is zero.
    pub fn new(width: usize, height: usize) -> MazeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            squares: (0..height)
                .map(|_| (0..width).map(|_| Cell::Wall).collect())
                .collect(),
        })
    }

    /// Parse a grid from text, one line per row.
    ///
    /// `🟫` or `#` is a wall, `🟩` or `.` is an open square. Leading and
    /// trailing blank lines are ignored, as is indentation on every row.
    ///
    /// # Examples
    /// ```
    /// use maze_walker::{Grid, Point};
    ///
    /// let grid = Grid::parse("
    /// 🟩🟩🟫
    /// 🟫🟩🟩").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert!(grid.is_open(Point::new(1, 1)));
    /// ```
    pub fn parse(text: &str) -> MazeResult<Self> {
        let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut squares = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let cells = row
                .chars()
                .enumerate()
                .map(|(x, c)| match c {
                    Self::S_WALL | Self::A_WALL => Ok(Cell::Wall),
                    Self::S_OPEN | Self::A_OPEN => Ok(Cell::Open),
                    character => Err(MazeError::UnexpectedCharacter { character, x, y }),
                })
                .collect::<MazeResult<Vec<_>>>()?;
            if cells.len() != width {
                return Err(MazeError::RaggedRow {
                    y,
                    expected: width,
                    found: cells.len(),
                });
            }
            squares.push(cells);
        }

        Ok(Grid {
            width,
            height: squares.len(),
            squares,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Fail with [MazeError::OutOfBounds] unless `point` is inside the grid.
    pub fn check_bounds(&self, point: Point) -> MazeResult<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, point: Point) -> Option<Cell> {
        self.squares.get(point.y)?.get(point.x).copied()
    }

    /// Whether `point` is inside the grid and not a wall
    pub fn is_open(&self, point: Point) -> bool {
        self.get(point) == Some(Cell::Open)
    }

    pub fn set(&mut self, point: Point, cell: Cell) -> MazeResult<()> {
        self.check_bounds(point)?;
        self.squares[point.y][point.x] = cell;
        Ok(())
    }

    /// In-bounds points `distance` squares away from `point` in the four
    /// cardinal directions.
    pub fn neighbours(&self, point: Point, distance: usize) -> impl Iterator<Item = Point> + '_ {
        let step = isize::try_from(distance).ok();
        Self::DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            let step = step?;
            point
                .offset(dx.checked_mul(step)?, dy.checked_mul(step)?)
                .filter(|p| self.contains(*p))
        })
    }

    /// All open squares, row by row
    pub fn open_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.squares.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| **c == Cell::Open)
                .map(move |(x, _)| Point { x, y })
        })
    }

    /// Render each row with `glyph`, joined by newlines.
    pub fn render_with<F>(&self, mut glyph: F) -> String
    where
        F: FnMut(Point, Cell) -> char,
    {
        self.squares
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, c)| glyph(Point { x, y }, *c))
                    .join("")
            })
            .join("\n")
    }

    /// Emoji representation, readable by [Grid::parse]
    pub fn to_emojis(&self) -> String {
        self.render_with(|_, cell| match cell {
            Cell::Wall => Self::S_WALL,
            Cell::Open => Self::S_OPEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid, Point};
    use crate::error::MazeError;

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.open_points().count(), 0);
        assert_eq!(grid.get(Point::new(3, 2)), Some(Cell::Wall));
        assert_eq!(grid.get(Point::new(4, 2)), None);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn parse_mixed_emoji_and_ascii() {
        let grid = Grid::parse(
            "
🟩#🟩
.🟩🟫",
        )
        .unwrap();

        assert_eq!(
            grid.open_points().collect::<Vec<_>>(),
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn parse_reports_unknown_characters() {
        let err = Grid::parse("🟩🟩\n🟩x").unwrap_err();
        assert_eq!(
            err,
            MazeError::UnexpectedCharacter {
                character: 'x',
                x: 1,
                y: 1
            }
        );
    }

    #[test]
    fn parse_reports_ragged_rows() {
        let err = Grid::parse("###\n##").unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRow {
                y: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::parse("\n \n").unwrap_err(), MazeError::EmptyGrid);
    }

    #[test]
    fn emojis_parse_back_to_same_grid() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(Point::new(1, 0), Cell::Open).unwrap();
        grid.set(Point::new(2, 1), Cell::Open).unwrap();

        assert_eq!(grid.to_emojis(), "🟫🟩🟫\n🟫🟫🟩");
        assert_eq!(Grid::parse(&grid.to_emojis()).unwrap(), grid);
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        let mut corner: Vec<_> = grid.neighbours(Point::new(0, 0), 1).collect();
        corner.sort_by_key(|p| (p.y, p.x));
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);

        assert_eq!(grid.neighbours(Point::new(1, 1), 1).count(), 4);
        assert_eq!(grid.neighbours(Point::new(1, 1), 2).count(), 0);
        assert_eq!(grid.neighbours(Point::new(0, 0), 2).count(), 2);
    }

    #[test]
    fn parse_ignores_indentation_on_every_row() {
        let grid = Grid::parse("  ..\n  .#  \n\t##").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert!(grid.is_open(Point::new(0, 1)));
        assert!(!grid.is_open(Point::new(1, 1)));
    }

    #[test]
    fn huge_neighbour_distance_finds_nothing() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbours(Point::new(1, 1), usize::MAX).count(), 0);
        assert_eq!(grid.neighbours(Point::new(1, 1), isize::MAX as usize).count(), 0);
    }

    #[test]
    fn set_out_of_bounds_fails() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            grid.set(Point::new(2, 0), Cell::Open),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}
