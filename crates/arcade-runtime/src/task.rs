//! Step task trait

use crate::input::PollMode;
use arcade_core::GameWorld;
use std::fmt;
use std::time::{Duration, Instant};

/// The three kinds of periodic work over the game world
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Input,
    World,
    Render,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Input => f.write_str("input"),
            TaskKind::World => f.write_str("world"),
            TaskKind::Render => f.write_str("render"),
        }
    }
}

/// A named unit of periodic work that a scheduler steps
///
/// Under the time-sliced scheduler `step` is called with
/// [`PollMode::NonBlocking`] and must return without blocking. Under the
/// exclusive scheduler it is called with [`PollMode::Blocking`] in a loop by
/// whichever thread holds the token.
pub trait StepTask: Send {
    /// Human-readable name for this task
    fn name(&self) -> &str;

    fn kind(&self) -> TaskKind;

    /// Own cadence; zero means eligible on every scheduler tick
    fn period(&self) -> Duration;

    /// Do one bounded unit of work. Every task is a no-op once the game is
    /// over, except rendering, which draws the final screen.
    fn step(&mut self, world: &mut GameWorld, now: Instant, mode: PollMode);
}
