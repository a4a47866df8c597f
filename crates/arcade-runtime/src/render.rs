//! Text rendering of the board

use crate::input::PollMode;
use crate::task::{StepTask, TaskKind};
use arcade_core::{GameWorld, Point};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::warn;

/// Clear the screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Build one frame: either the game-over summary, or the score line followed
/// by the grid with cells separated by single spaces
pub fn render_frame(world: &GameWorld) -> String {
    if let Some(reason) = world.reason() {
        return format!(
            "GAME OVER!\nYour score: {}. (reason: {})\nPress Enter to exit.\n",
            world.score(),
            reason
        );
    }

    let mut frame = format!("Score: {}. Press 'q' then Enter to quit.\n", world.score());
    for y in 0..world.height() {
        for x in 0..world.width() {
            if x > 0 {
                frame.push(' ');
            }
            frame.push(world.cell_at(Point::new(x, y)).glyph());
        }
        frame.push('\n');
    }
    frame
}

/// Clear the display and write the current frame
pub fn write_frame<W: Write + ?Sized>(out: &mut W, world: &GameWorld) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.write_all(render_frame(world).as_bytes())?;
    out.flush()
}

pub struct RenderTask<W> {
    out: W,
    period: Duration,
}

impl<W: Write + Send> RenderTask<W> {
    pub fn new(out: W, period: Duration) -> Self {
        Self { out, period }
    }
}

impl<W: Write + Send> StepTask for RenderTask<W> {
    fn name(&self) -> &str {
        "renderNextScreen"
    }

    fn kind(&self) -> TaskKind {
        TaskKind::Render
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn step(&mut self, world: &mut GameWorld, _now: Instant, _mode: PollMode) {
        if let Err(e) = write_frame(&mut self.out, world) {
            warn!(error = %e, "failed to write frame");
        }
    }
}
