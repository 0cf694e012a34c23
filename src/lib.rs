//! Generate a maze, find the shortest way through it and walk it
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_walker::{find_path, MazeGenerator, Point};
//!
//! let grid = MazeGenerator::new(Some(0)).generate(40, 30).unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(38, 28)).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(38, 28)));
//! ```
//!
//! ## Walk a hand-made maze
//! ```
//! use std::time::Duration;
//! use maze_walker::{Agent, Clock, Grid, ManualClock, Point};
//!
//! let grid = Grid::parse("
//! 🟩🟩🟩
//! 🟫🟫🟩
//! 🟩🟩🟩").unwrap();
//! let clock = ManualClock::default();
//! let interval = Duration::from_millis(100);
//! let mut agent =
//!     Agent::new(&grid, Point::new(0, 0), Point::new(0, 2), interval, clock.now()).unwrap();
//!
//! for _ in 0..agent.path().len() {
//!     clock.advance(interval);
//!     agent.tick(&clock);
//! }
//! assert!(agent.has_arrived());
//! assert_eq!(agent.position(), Point::new(0, 2));
//! ```

pub mod agent;
pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod path_planner;

pub use agent::{Agent, AgentState, Clock, ManualClock, SystemClock};
pub use config::WalkConfig;
pub use error::{MazeError, MazeResult};
pub use grid::{Cell, Grid, Point};
pub use maze_generator::MazeGenerator;
pub use path_planner::{find_path, Path};
