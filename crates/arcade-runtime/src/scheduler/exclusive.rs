//! Exclusive scheduler — one execution unit, no time slicing.
//!
//! Models a single-core machine: the core is a token passed over a
//! zero-capacity channel. Each task gets its own thread that first waits for
//! the token. The first task's thread is handed the token after a short
//! startup delay, and only then are the other threads started. The holder
//! loops its task forever with blocking steps and never gives the token
//! back, so every other thread starves for the whole run.

use super::task_entry;
use crate::input::PollMode;
use crate::report::RunReport;
use crate::task::StepTask;
use arcade_core::{ArcadeError, GameWorld, Result};
use crossbeam::channel::{bounded, Receiver};
use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The single execution unit. Whoever holds it owns the world and the console.
struct Token {
    world: GameWorld,
    console: Box<dyn Write + Send>,
}

type TaskThread = JoinHandle<(u64, Option<GameWorld>)>;

pub struct ExclusiveScheduler {
    startup_delay: Duration,
    console: Box<dyn Write + Send>,
}

impl ExclusiveScheduler {
    /// Announcements are discarded until a console is supplied
    pub fn new(startup_delay: Duration) -> Self {
        Self {
            startup_delay,
            console: Box::new(io::sink()),
        }
    }

    /// Where the token holder announces that it acquired the cpu
    pub fn with_console<W: Write + Send + 'static>(mut self, console: W) -> Self {
        self.console = Box::new(console);
        self
    }

    /// Run until the token holder observes GameOver. Returns the world and
    /// the per-task step counts; starved tasks report zero steps.
    pub fn run(
        self,
        world: GameWorld,
        tasks: Vec<Box<dyn StepTask>>,
    ) -> Result<(GameWorld, RunReport)> {
        let (grant, cpu) = bounded::<Token>(0);
        let mut tasks = tasks.into_iter();
        let first = tasks
            .next()
            .ok_or_else(|| ArcadeError::SchedulerError("no tasks to run".to_string()))?;

        let mut entries = vec![task_entry(&*first, 0)];
        let holder = spawn_task_thread(first, cpu.clone())?;

        thread::sleep(self.startup_delay);
        info!(task = %entries[0].name, "granting the only cpu");
        grant
            .send(Token {
                world,
                console: self.console,
            })
            .map_err(|_| ArcadeError::SchedulerError("cpu channel closed".to_string()))?;

        let mut waiting = Vec::new();
        for task in tasks {
            entries.push(task_entry(&*task, 0));
            waiting.push(spawn_task_thread(task, cpu.clone())?);
        }

        let (holder_steps, world) = join_task_thread(holder)?;
        let world = world.ok_or_else(|| {
            ArcadeError::SchedulerError("token holder finished without the world".to_string())
        })?;
        entries[0].steps = holder_steps;

        // Nobody will ever send another token; closing the channel lets the
        // starved threads wake up empty-handed and exit.
        drop(grant);
        drop(cpu);
        for (entry, handle) in entries[1..].iter_mut().zip(waiting) {
            let (steps, _) = join_task_thread(handle)?;
            entry.steps = steps;
        }

        let report = RunReport {
            tasks: entries,
            ticks: 0,
            reason: world.reason(),
        };
        info!(%report, "exclusive run finished");
        Ok((world, report))
    }
}

fn spawn_task_thread(mut task: Box<dyn StepTask>, cpu: Receiver<Token>) -> Result<TaskThread> {
    let handle = thread::Builder::new()
        .name(task.name().to_string())
        .spawn(move || {
            let Ok(Token {
                mut world,
                mut console,
            }) = cpu.recv()
            else {
                debug!(task = task.name(), "never acquired the cpu");
                return (0, None);
            };
            info!(task = task.name(), "acquired the cpu");
            if let Err(e) = writeln!(console, "[{}] acquired CPU (single-core)", task.name())
                .and_then(|_| console.flush())
            {
                warn!(error = %e, "failed to announce cpu acquisition");
            }

            // No preemption and no yielding: run until the game ends
            let mut steps = 0;
            loop {
                task.step(&mut world, Instant::now(), PollMode::Blocking);
                steps += 1;
                if world.is_over() {
                    return (steps, Some(world));
                }
            }
        })?;
    Ok(handle)
}

fn join_task_thread(handle: TaskThread) -> Result<(u64, Option<GameWorld>)> {
    handle
        .join()
        .map_err(|_| ArcadeError::SchedulerError("task thread panicked".to_string()))
}
