//! Arcade Runtime - Tasks and the two scheduling models
//!
//! Provides the building blocks both game modes are assembled from:
//! - `InputSource` — blocking or shared-buffer command polling
//! - `InputReader` — background thread filling the shared buffer
//! - `StepTask` — trait for the input, world and render tasks
//! - `TaskClock` — per-task next-eligible tracking
//! - `ExclusiveScheduler` — one token, no time slicing, permanent starvation
//! - `TimeSlicedScheduler` — fixed tick, every eligible task gets one bounded step

mod clock;
mod input;
mod input_task;
mod render;
mod report;
mod scheduler;
mod task;
mod world_task;

#[cfg(test)]
mod test_support;

pub use clock::TaskClock;
pub use input::{BlockingSource, InputReader, InputSlot, InputSource, PollMode, SharedBufferSource};
pub use input_task::InputTask;
pub use render::{render_frame, write_frame, RenderTask, CLEAR_SCREEN};
pub use report::{RunReport, TaskSteps};
pub use scheduler::{ExclusiveScheduler, TimeSlicedScheduler};
pub use task::{StepTask, TaskKind};
pub use world_task::WorldTask;
