//! Game World — the state machine every task reads and mutates.
//!
//! The world is `Running` until a [`GameOverReason`] is recorded in its
//! [`GameStatus`], after which it is terminal. Field ownership follows a
//! single-writer convention:
//!
//! - the input task writes `pacman` (via [`GameWorld::apply`])
//! - the world task writes ghosts, dots, score and GameOver (via [`GameWorld::advance`])
//! - the render task only reads
//!
//! The status lives behind an `Arc` so a background input reader can observe
//! (and, on stream failure, set) GameOver without touching the rest of the world.

use crate::config::GameConfig;
use crate::types::{Command, Point};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Points awarded per dot eaten
pub const DOT_SCORE: i64 = 10;

/// Why the game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Quit,
    Caught,
    Win,
    InputError,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Quit => "quit",
            GameOverReason::Caught => "caught",
            GameOverReason::Win => "win",
            GameOverReason::InputError => "input-error",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set-once termination signal shared between the world and the input reader.
///
/// The first recorded reason wins; later calls to [`GameStatus::finish`] are
/// rejected, so GameOver can never be reset or re-labelled.
#[derive(Debug, Default)]
pub struct GameStatus {
    reason: OnceLock<GameOverReason>,
}

impl GameStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.reason.get().is_some()
    }

    pub fn reason(&self) -> Option<GameOverReason> {
        self.reason.get().copied()
    }

    /// Record the end of the game. Returns false if it had already ended.
    pub fn finish(&self, reason: GameOverReason) -> bool {
        self.reason.set(reason).is_ok()
    }
}

/// What occupies a grid cell, in drawing precedence order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Pacman,
    Ghost,
    Dot,
    Empty,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Pacman => 'P',
            Cell::Ghost => 'G',
            Cell::Dot => '.',
            Cell::Empty => ' ',
        }
    }
}

/// The shared game state
#[derive(Debug)]
pub struct GameWorld {
    width: i32,
    height: i32,
    pacman: Point,
    ghosts: Vec<Point>,
    dots: HashSet<Point>,
    score: i64,
    status: Arc<GameStatus>,
}

impl GameWorld {
    /// Build the initial world: spawns from the config and a dot on every cell
    pub fn new(config: &GameConfig) -> Self {
        let width = config.grid.width;
        let height = config.grid.height;

        let cells = (width.max(0) as usize).saturating_mul(height.max(0) as usize);
        let mut dots = HashSet::with_capacity(cells);
        for x in 0..width {
            for y in 0..height {
                dots.insert(Point::new(x, y));
            }
        }

        Self {
            width,
            height,
            pacman: config.spawn.pacman,
            ghosts: config.spawn.ghosts.clone(),
            dots,
            score: config.spawn.initial_score,
            status: Arc::new(GameStatus::new()),
        }
    }

    /// The classic 20×20 board with two ghosts
    pub fn standard() -> Self {
        Self::new(&GameConfig::default())
    }

    // --- Queries ---

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pacman(&self) -> Point {
        self.pacman
    }

    pub fn ghosts(&self) -> &[Point] {
        &self.ghosts
    }

    pub fn dots(&self) -> &HashSet<Point> {
        &self.dots
    }

    pub fn has_dot(&self, p: Point) -> bool {
        self.dots.contains(&p)
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn reason(&self) -> Option<GameOverReason> {
        self.status.reason()
    }

    /// A shared handle to the termination signal, for threads that run
    /// alongside the scheduler
    pub fn status_handle(&self) -> Arc<GameStatus> {
        Arc::clone(&self.status)
    }

    /// Record the end of the game. Returns false if it had already ended.
    pub fn finish(&self, reason: GameOverReason) -> bool {
        self.status.finish(reason)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }

    /// Pull a point back onto the grid, axis by axis
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0, self.width - 1), p.y.clamp(0, self.height - 1))
    }

    pub fn is_ghost(&self, p: Point) -> bool {
        self.ghosts.contains(&p)
    }

    /// Resolve a cell by precedence: pacman > ghost > dot > empty
    pub fn cell_at(&self, p: Point) -> Cell {
        if p == self.pacman {
            Cell::Pacman
        } else if self.is_ghost(p) {
            Cell::Ghost
        } else if self.has_dot(p) {
            Cell::Dot
        } else {
            Cell::Empty
        }
    }

    // --- Mutations ---

    /// Apply a player command. Writes `pacman` (or ends the game on quit).
    ///
    /// No-op once the game is over.
    pub fn apply(&mut self, command: Command) {
        if self.is_over() {
            return;
        }

        match command {
            Command::Quit => {
                self.finish(GameOverReason::Quit);
            }
            Command::Move(direction) => {
                self.pacman = self.clamp(self.pacman.step(direction));
            }
        }
    }

    /// Run one world tick: move ghosts, then resolve collisions, dots and win.
    /// Writes ghosts, dots, score and GameOver.
    ///
    /// `draw` yields a delta in `{-1, 0, 1}` and is called twice per ghost
    /// (x, then y). A ghost only moves if the combined candidate is on the
    /// board; axes are never clamped separately.
    pub fn advance(&mut self, mut draw: impl FnMut() -> i32) {
        if self.is_over() {
            return;
        }

        for i in 0..self.ghosts.len() {
            let delta = Point::new(draw(), draw());
            let candidate = self.ghosts[i] + delta;
            if self.in_bounds(candidate) {
                self.ghosts[i] = candidate;
            }
        }

        if self.is_ghost(self.pacman) {
            self.finish(GameOverReason::Caught);
            return;
        }

        if self.dots.remove(&self.pacman) {
            self.score += DOT_SCORE;
        }

        if self.dots.is_empty() {
            self.finish(GameOverReason::Win);
        }
    }
}
