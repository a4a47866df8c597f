//! Per-task cadence tracking for the time-sliced scheduler

use std::time::{Duration, Instant};

/// Tracks when each task next becomes eligible to run.
///
/// Kept separate from the scheduler tick: the tick decides how often the
/// scheduler looks, the task period decides whether a task is due.
pub struct TaskClock {
    next_run: Vec<Instant>,
}

impl TaskClock {
    /// Every task starts eligible at `start`
    pub fn new(task_count: usize, start: Instant) -> Self {
        Self {
            next_run: vec![start; task_count],
        }
    }

    /// True if the tick at `now` is at or after the task's next-eligible time
    pub fn is_eligible(&self, index: usize, now: Instant) -> bool {
        now >= self.next_run[index]
    }

    /// Push the task's next-eligible time out by `period` from this tick.
    /// A zero period keeps the task eligible on every tick.
    pub fn reschedule(&mut self, index: usize, now: Instant, period: Duration) {
        self.next_run[index] = if period.is_zero() { now } else { now + period };
    }

    pub fn next_run(&self, index: usize) -> Instant {
        self.next_run[index]
    }
}
