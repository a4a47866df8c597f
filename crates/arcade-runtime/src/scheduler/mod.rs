//! The two scheduling models

mod exclusive;
mod sliced;

pub use exclusive::ExclusiveScheduler;
pub use sliced::TimeSlicedScheduler;

use crate::report::TaskSteps;
use crate::task::StepTask;

fn task_entry(task: &dyn StepTask, steps: u64) -> TaskSteps {
    TaskSteps {
        name: task.name().to_string(),
        kind: task.kind(),
        steps,
    }
}
