//! mt — time-sliced cooperative multitasking

use anyhow::{Context, Result};
use arcade_core::{GameConfig, GameWorld};
use arcade_runtime::{
    InputReader, InputSlot, InputTask, RenderTask, SharedBufferSource, StepTask,
    TimeSlicedScheduler,
};
use std::io::{self, BufReader};
use std::sync::Arc;

pub fn run(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let timing = &config.timing;
    let mut world = GameWorld::new(config);

    // Blocking reads happen on their own thread so no step ever waits on stdin
    let slot = Arc::new(InputSlot::new());
    let reader = InputReader::spawn(
        BufReader::new(io::stdin()),
        Arc::clone(&slot),
        world.status_handle(),
    )
    .context("Failed to start input reader")?;

    let tasks: Vec<Box<dyn StepTask>> = vec![
        Box::new(InputTask::with_period(
            Box::new(SharedBufferSource::new(slot)),
            timing.input_period(),
        )),
        Box::new(super::world_task(timing, seed)),
        Box::new(RenderTask::new(io::stdout(), timing.render_period())),
    ];

    // The reader exits after the first line read once the game is over,
    // so joining it doubles as "press Enter to exit".
    TimeSlicedScheduler::new(timing.time_slice(), tasks)
        .run(&mut world, || reader.join())
        .context("Time-sliced scheduler failed")?;

    Ok(())
}
