//! nomt — threads without multitasking on a modeled single core

use anyhow::{Context, Result};
use arcade_core::{GameConfig, GameWorld};
use arcade_runtime::{
    write_frame, BlockingSource, ExclusiveScheduler, InputTask, RenderTask, StepTask,
};
use std::io::{self, BufRead, BufReader, Read};

pub fn run(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let timing = &config.timing;
    let world = GameWorld::new(config);

    let input = BlockingSource::new(line_reader(io::stdin()));
    let tasks: Vec<Box<dyn StepTask>> = vec![
        Box::new(InputTask::with_period(Box::new(input), timing.input_period())),
        Box::new(super::world_task(timing, seed)),
        Box::new(RenderTask::new(io::stdout(), timing.render_period())),
    ];

    let (world, _report) = ExclusiveScheduler::new(timing.startup_delay())
        .with_console(io::stdout())
        .run(world, tasks)
        .context("Exclusive scheduler failed")?;

    // The render thread never got the cpu; show the outcome from here
    write_frame(&mut io::stdout(), &world).context("Failed to write final frame")?;

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        tracing::debug!(error = %e, "no acknowledgement line");
    }
    Ok(())
}

/// Stdin already buffers internally. A one-byte outer buffer keeps every
/// line the game did not consume in stdin's own buffer, where the
/// acknowledgement read finds it.
fn line_reader<R: Read>(inner: R) -> BufReader<R> {
    BufReader::with_capacity(1, inner)
}
