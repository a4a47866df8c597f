//! Time-sliced scheduler — cooperative multitasking on a fixed tick.
//!
//! Every tick the scheduler walks the tasks in their fixed order and gives
//! each eligible one a single non-blocking step. Input therefore always runs
//! before World, and World before Render, within a tick. The only blocking
//! point is after the game ends: one final render, then a wait for the
//! player's acknowledgement.

use super::task_entry;
use crate::clock::TaskClock;
use crate::input::PollMode;
use crate::report::RunReport;
use crate::task::{StepTask, TaskKind};
use arcade_core::{ArcadeError, GameWorld, Result};
use crossbeam::channel::tick;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct TimeSlicedScheduler {
    time_slice: Duration,
    tasks: Vec<Box<dyn StepTask>>,
}

impl TimeSlicedScheduler {
    /// `tasks` are dispatched in the given order on every tick
    pub fn new(time_slice: Duration, tasks: Vec<Box<dyn StepTask>>) -> Self {
        Self { time_slice, tasks }
    }

    /// Tick until GameOver, render the final screen, then call `acknowledge`
    /// (which may block) before returning the run summary.
    pub fn run<A>(&mut self, world: &mut GameWorld, acknowledge: A) -> Result<RunReport>
    where
        A: FnOnce() -> Result<()>,
    {
        let mut clock = TaskClock::new(self.tasks.len(), Instant::now());
        let mut steps = vec![0u64; self.tasks.len()];
        let mut ticks = 0u64;

        info!(time_slice = ?self.time_slice, tasks = self.tasks.len(), "time-sliced run starting");
        let ticker = tick(self.time_slice);

        for now in ticker.iter() {
            ticks += 1;

            for (i, task) in self.tasks.iter_mut().enumerate() {
                if world.is_over() {
                    break;
                }
                if !clock.is_eligible(i, now) {
                    continue;
                }

                debug!(task = task.name(), kind = %task.kind(), tick = ticks, "dispatch");
                task.step(world, now, PollMode::NonBlocking);
                steps[i] += 1;
                clock.reschedule(i, now, task.period());
            }

            if world.is_over() {
                self.final_render(world, now, &mut steps);
                acknowledge()?;

                let report = RunReport {
                    tasks: self
                        .tasks
                        .iter()
                        .zip(&steps)
                        .map(|(task, &n)| task_entry(&**task, n))
                        .collect(),
                    ticks,
                    reason: world.reason(),
                };
                info!(%report, "time-sliced run finished");
                return Ok(report);
            }
        }

        Err(ArcadeError::SchedulerError("ticker stopped".to_string()))
    }

    /// Render once more regardless of cadence
    fn final_render(&mut self, world: &mut GameWorld, now: Instant, steps: &mut [u64]) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            if task.kind() == TaskKind::Render {
                task.step(world, now, PollMode::NonBlocking);
                steps[i] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputReader, InputSlot, InputSource, SharedBufferSource};
    use crate::input_task::InputTask;
    use crate::render::RenderTask;
    use crate::world_task::WorldTask;
    use arcade_core::{GameConfig, GameOverReason, Point};
    use crate::test_support::ChannelStream;
    use crossbeam::channel::unbounded;
    use std::collections::VecDeque;
    use std::io::{self, BufReader, Cursor};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    /// Hands out one scripted poll result per call; `None` means nothing typed
    struct Scripted(VecDeque<Option<&'static str>>);

    impl InputSource for Scripted {
        fn poll(&mut self, _mode: PollMode) -> Option<String> {
            self.0.pop_front().flatten().map(str::to_string)
        }
    }

    fn ghostless_world() -> GameWorld {
        let mut config = GameConfig::default();
        config.spawn.ghosts = vec![];
        GameWorld::new(&config)
    }

    fn tasks(input: Box<dyn InputSource>) -> Vec<Box<dyn StepTask>> {
        let slow = Duration::from_secs(3600);
        vec![
            Box::new(InputTask::new(input)),
            Box::new(WorldTask::with_seed(slow, 11)),
            Box::new(RenderTask::new(io::sink(), slow)),
        ]
    }

    #[test]
    fn test_cadences_and_final_render() {
        let script = Scripted(VecDeque::from(vec![Some("d"), None, Some("s"), None, Some("q")]));
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(script)));
        let mut world = ghostless_world();

        let report = scheduler.run(&mut world, || Ok(())).unwrap();

        assert_eq!(report.ticks, 5);
        assert_eq!(report.steps_for(TaskKind::Input), 5);
        // World and render were due only on the first tick; render also ran once at the end
        assert_eq!(report.steps_for(TaskKind::World), 1);
        assert_eq!(report.steps_for(TaskKind::Render), 2);
        assert_eq!(report.reason, Some(GameOverReason::Quit));
        assert_eq!(world.pacman(), Point::new(1, 1));
    }

    #[test]
    fn test_input_applied_before_world_in_same_tick() {
        let script = Scripted(VecDeque::from(vec![Some("d"), Some("q")]));
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(script)));
        let mut world = ghostless_world();

        scheduler.run(&mut world, || Ok(())).unwrap();

        // The first world step saw pacman already at (1, 0)
        assert!(!world.has_dot(Point::new(1, 0)));
        assert!(world.has_dot(Point::ORIGIN));
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_acknowledge_runs_once_after_game_over() {
        let script = Scripted(VecDeque::from(vec![Some("q")]));
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(script)));
        let mut world = ghostless_world();
        let mut acknowledged = 0;

        scheduler
            .run(&mut world, || {
                acknowledged += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(acknowledged, 1);
        assert!(world.is_over());
    }

    #[test]
    fn test_acknowledge_error_propagates() {
        let script = Scripted(VecDeque::from(vec![Some("q")]));
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(script)));
        let mut world = ghostless_world();

        let err = scheduler
            .run(&mut world, || Err(ArcadeError::InputClosed))
            .unwrap_err();
        assert!(matches!(err, ArcadeError::InputClosed));
    }

    #[test]
    fn test_reader_end_of_stream_stops_scheduler() {
        let mut world = ghostless_world();
        let slot = Arc::new(InputSlot::new());
        let reader =
            InputReader::spawn(Cursor::new(""), Arc::clone(&slot), world.status_handle()).unwrap();
        let source = SharedBufferSource::new(slot);
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(source)));

        let report = scheduler.run(&mut world, || reader.join()).unwrap();

        assert_eq!(report.reason, Some(GameOverReason::InputError));
        assert!(report.steps_for(TaskKind::Render) >= 1);
    }

    #[test]
    fn test_waits_for_acknowledgement_line_after_quit() {
        let mut world = ghostless_world();
        let status = world.status_handle();
        let slot = Arc::new(InputSlot::new());
        let (tx, rx) = unbounded();
        let reader = InputReader::spawn(
            BufReader::new(ChannelStream::new(rx)),
            Arc::clone(&slot),
            world.status_handle(),
        )
        .unwrap();
        let source = SharedBufferSource::new(slot);
        let mut scheduler = TimeSlicedScheduler::new(Duration::from_millis(1), tasks(Box::new(source)));

        let ack_sent = Arc::new(AtomicBool::new(false));
        let player = {
            let ack_sent = Arc::clone(&ack_sent);
            thread::spawn(move || {
                tx.send(b"q\n".to_vec()).unwrap();
                while !status.is_over() {
                    thread::sleep(Duration::from_millis(1));
                }
                // Linger on the game-over screen before pressing Enter
                thread::sleep(Duration::from_millis(50));
                ack_sent.store(true, Ordering::SeqCst);
                tx.send(b"\n".to_vec()).unwrap();
            })
        };

        let report = scheduler
            .run(&mut world, || {
                reader.join()?;
                assert!(ack_sent.load(Ordering::SeqCst), "returned before the acknowledgement");
                Ok(())
            })
            .unwrap();
        player.join().unwrap();

        assert_eq!(report.reason, Some(GameOverReason::Quit));
        assert!(report.steps_for(TaskKind::Render) >= 1);
    }
}
