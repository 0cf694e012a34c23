//! Agent walking a planned path at a fixed pace

use std::cell::Cell;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::MazeResult;
use crate::grid::{Grid, Point};
use crate::path_planner::{find_path, Path};

/// Source of timestamps, measured from an arbitrary fixed epoch.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock, counting from its creation
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Where the agent is in its walk
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AgentState {
    /// Less than one move interval since the last step
    Waiting,
    /// Next call to [Agent::advance] takes a step
    ReadyToStep,
    /// Path consumed, or there never was one
    Arrived,
}

/// Walker that follows the shortest path from start to end
#[derive(Debug)]
pub struct Agent {
    position: Point,
    end: Point,
    path: Path,
    /// Index of the next step in `path`
    next: usize,
    last_move: Duration,
    move_interval: Duration,
}

impl Agent {
    /// Plan the path from `start` to `end` and place the agent at `start`.
    ///
    /// `now` counts as the time of the last move, so the first step is
    /// taken one interval later. The first step lands on `start` itself.
    pub fn new(
        grid: &Grid,
        start: Point,
        end: Point,
        move_interval: Duration,
        now: Duration,
    ) -> MazeResult<Self> {
        let path = find_path(grid, start, end)?;
        Ok(Self::with_path(start, end, path, move_interval, now))
    }

    /// Agent following an already planned `path`
    pub fn with_path(
        start: Point,
        end: Point,
        path: Path,
        move_interval: Duration,
        now: Duration,
    ) -> Self {
        Self {
            position: start,
            end,
            path,
            next: 0,
            last_move: now,
            move_interval,
        }
    }

    pub fn state(&self, now: Duration) -> AgentState {
        if self.next >= self.path.len() {
            AgentState::Arrived
        } else if now.saturating_sub(self.last_move) < self.move_interval {
            AgentState::Waiting
        } else {
            AgentState::ReadyToStep
        }
    }

    /// Take the next step if a full move interval has passed since the last
    /// one. Does nothing once the path is consumed.
    pub fn advance(&mut self, now: Duration) {
        if self.state(now) != AgentState::ReadyToStep {
            return;
        }
        self.position = self.path[self.next];
        self.next += 1;
        self.last_move = now;
        trace!(position = %self.position, step = self.next, "Agent moved");
    }

    /// [Self::advance] with the current time of `clock`
    pub fn tick(&mut self, clock: &impl Clock) {
        self.advance(clock.now());
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of path entries consumed so far
    pub fn steps_taken(&self) -> usize {
        self.next
    }

    /// Whether the whole path has been walked. Never true for an empty path.
    pub fn has_arrived(&self) -> bool {
        !self.path.is_empty() && self.next >= self.path.len()
    }
}
