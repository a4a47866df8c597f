//! Run summaries returned by the schedulers

use crate::task::TaskKind;
use arcade_core::GameOverReason;
use std::fmt;

/// How many times one task was stepped during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSteps {
    pub name: String,
    pub kind: TaskKind,
    pub steps: u64,
}

/// Outcome of a scheduler run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per task, in scheduling order
    pub tasks: Vec<TaskSteps>,
    /// Scheduler ticks elapsed (time-sliced model only)
    pub ticks: u64,
    pub reason: Option<GameOverReason>,
}

impl RunReport {
    /// Total steps taken by tasks of the given kind
    pub fn steps_for(&self, kind: TaskKind) -> u64 {
        self.tasks
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.steps)
            .sum()
    }

    /// Tasks that never got to run
    pub fn starved(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|t| t.steps == 0)
            .map(|t| t.name.as_str())
            .collect()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self
            .tasks
            .iter()
            .map(|t| format!("{}={}", t.name, t.steps))
            .collect();
        write!(f, "steps [{}], ticks {}", steps.join(", "), self.ticks)?;
        if let Some(reason) = self.reason {
            write!(f, ", reason {}", reason)?;
        }
        Ok(())
    }
}
