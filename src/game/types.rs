//! Session and obstacle data structures.

use crate::constants::{
    AVATAR_X, FIELD_HEIGHT, FIELD_WIDTH, GAP_MARGIN, GAP_SIZE, PIPE_WIDTH,
};
use rand::Rng;

/// Lifecycle of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Pre-start, menu shown.
    Idle,
    /// Simulation running.
    Active,
    /// Terminal event occurred, summary shown.
    Ended,
}

/// A single gap obstacle (top + bottom barrier pair).
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge in field units (float for smooth scrolling).
    pub x: f64,
    /// Height of the upper barrier; the gap spans [gap_top, gap_top + GAP_SIZE].
    pub gap_top: f64,
    /// Whether this obstacle has already awarded a point.
    pub scored: bool,
}

impl Obstacle {
    /// Right edge of the obstacle in field units.
    pub fn trailing_edge(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    /// True once the obstacle has fully scrolled past the avatar's column.
    pub fn passed_avatar(&self) -> bool {
        self.trailing_edge() < AVATAR_X
    }
}

/// The complete mutable state for one play-through.
///
/// One instance lives for the process lifetime; `start_run` resets it
/// for each new run while `best_score` carries across runs.
#[derive(Debug, Clone)]
pub struct Session {
    /// Avatar vertical position (top edge) in field units.
    pub avatar_y: f64,
    /// Avatar vertical velocity in field units per frame (positive = downward).
    pub avatar_vel: f64,
    /// Obstacles in spawn order, left to right. Never reordered.
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed this run.
    pub score: u32,
    /// Highest score across runs this process.
    pub best_score: u32,
    pub status: RunStatus,
}

impl Session {
    pub fn new() -> Self {
        Self {
            avatar_y: FIELD_HEIGHT / 2.0,
            avatar_vel: 0.0,
            obstacles: Vec::new(),
            score: 0,
            best_score: 0,
            status: RunStatus::Idle,
        }
    }

    /// Reset for a fresh run and enter `Active`. `best_score` is preserved.
    /// Legal from any status, including mid-run.
    pub fn start_run(&mut self) {
        self.avatar_y = FIELD_HEIGHT / 2.0;
        self.avatar_vel = 0.0;
        self.obstacles.clear();
        self.score = 0;
        self.status = RunStatus::Active;
    }

    /// End the run on a terminal event and fold the score into `best_score`.
    pub(crate) fn end_run(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        self.status = RunStatus::Ended;
    }

    /// Spawn a new obstacle at the right edge with a random gap position.
    ///
    /// The gap is placed so that gap plus margins fit inside the field.
    /// If the field is too small for that, the range clamps to the
    /// minimum margin rather than failing.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let min_top = GAP_MARGIN;
        let max_top = (FIELD_HEIGHT - GAP_SIZE - GAP_MARGIN).max(min_top);
        let gap_top = if max_top > min_top {
            rng.gen_range(min_top..=max_top)
        } else {
            min_top
        };

        self.obstacles.push(Obstacle {
            x: FIELD_WIDTH,
            gap_top,
            scored: false,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
