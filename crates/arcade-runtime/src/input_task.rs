//! Input task: turns polled lines into pacman moves

use crate::input::{InputSource, PollMode};
use crate::task::{StepTask, TaskKind};
use arcade_core::{Command, GameOverReason, GameWorld};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct InputTask {
    source: Box<dyn InputSource>,
    period: Duration,
}

impl InputTask {
    /// Polls on every scheduler tick
    pub fn new(source: Box<dyn InputSource>) -> Self {
        Self::with_period(source, Duration::ZERO)
    }

    pub fn with_period(source: Box<dyn InputSource>, period: Duration) -> Self {
        Self { source, period }
    }
}

impl StepTask for InputTask {
    fn name(&self) -> &str {
        "getUserInput"
    }

    fn kind(&self) -> TaskKind {
        TaskKind::Input
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn step(&mut self, world: &mut GameWorld, _now: Instant, mode: PollMode) {
        if world.is_over() {
            return;
        }

        let Some(line) = self.source.poll(mode) else {
            // Nothing typed is normal for a non-blocking poll; a blocking poll
            // only comes back empty-handed when the stream is gone.
            if mode == PollMode::Blocking {
                warn!("blocking input poll failed, ending game");
                world.finish(GameOverReason::InputError);
            }
            return;
        };

        match Command::parse(&line) {
            Some(command) => {
                debug!(?command, "input command");
                world.apply(command);
            }
            None => debug!(line = %line, "ignoring unrecognized input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BlockingSource, InputSlot, SharedBufferSource};
    use arcade_core::Point;
    use std::io::Cursor;
    use std::sync::Arc;

    fn blocking_task(script: &'static str) -> InputTask {
        InputTask::new(Box::new(BlockingSource::new(Cursor::new(script))))
    }

    #[test]
    fn test_moves_and_quit() {
        let mut world = GameWorld::standard();
        let mut task = blocking_task("d\ns\nq\nd\n");
        let now = Instant::now();

        task.step(&mut world, now, PollMode::Blocking);
        assert_eq!(world.pacman(), Point::new(1, 0));
        task.step(&mut world, now, PollMode::Blocking);
        assert_eq!(world.pacman(), Point::new(1, 1));
        task.step(&mut world, now, PollMode::Blocking);
        assert_eq!(world.reason(), Some(GameOverReason::Quit));

        // Game over: the remaining "d" is never read
        task.step(&mut world, now, PollMode::Blocking);
        assert_eq!(world.pacman(), Point::new(1, 1));
    }

    #[test]
    fn test_unrecognized_input_ignored() {
        let mut world = GameWorld::standard();
        let mut task = blocking_task("x\nhello\n\n");
        let now = Instant::now();

        for _ in 0..3 {
            task.step(&mut world, now, PollMode::Blocking);
        }
        assert_eq!(world.pacman(), Point::ORIGIN);
        assert!(!world.is_over());
    }

    #[test]
    fn test_clamps_at_edges() {
        let mut world = GameWorld::standard();
        let mut task = blocking_task("w\na\n");
        let now = Instant::now();

        task.step(&mut world, now, PollMode::Blocking);
        task.step(&mut world, now, PollMode::Blocking);
        assert_eq!(world.pacman(), Point::ORIGIN);
    }

    #[test]
    fn test_blocking_end_of_stream_is_input_error() {
        let mut world = GameWorld::standard();
        let mut task = blocking_task("");

        task.step(&mut world, Instant::now(), PollMode::Blocking);
        assert_eq!(world.reason(), Some(GameOverReason::InputError));
    }

    #[test]
    fn test_non_blocking_empty_poll_is_not_an_error() {
        let mut world = GameWorld::standard();
        let slot = Arc::new(InputSlot::new());
        let mut task = InputTask::new(Box::new(SharedBufferSource::new(Arc::clone(&slot))));
        let now = Instant::now();

        task.step(&mut world, now, PollMode::NonBlocking);
        assert!(!world.is_over());

        slot.store("s".to_string());
        task.step(&mut world, now, PollMode::NonBlocking);
        assert_eq!(world.pacman(), Point::new(0, 1));
    }

    #[test]
    fn test_default_cadence_every_tick() {
        let task = blocking_task("");
        assert_eq!(task.period(), Duration::ZERO);
        assert_eq!(task.kind(), TaskKind::Input);
        assert_eq!(task.name(), "getUserInput");
    }
}
