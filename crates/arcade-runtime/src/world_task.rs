//! Ghost movement, collisions, dot eating and the win check

use crate::input::PollMode;
use crate::task::{StepTask, TaskKind};
use arcade_core::GameWorld;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::info;

pub struct WorldTask<R = StdRng> {
    rng: R,
    period: Duration,
}

impl WorldTask<StdRng> {
    /// Ghosts driven by an entropy-seeded RNG
    pub fn new(period: Duration) -> Self {
        Self::with_rng(period, StdRng::from_entropy())
    }

    /// Reproducible ghost movement
    pub fn with_seed(period: Duration, seed: u64) -> Self {
        Self::with_rng(period, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> WorldTask<R> {
    pub fn with_rng(period: Duration, rng: R) -> Self {
        Self { rng, period }
    }
}

impl<R: Rng + Send> StepTask for WorldTask<R> {
    fn name(&self) -> &str {
        "computeGameWorld"
    }

    fn kind(&self) -> TaskKind {
        TaskKind::World
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn step(&mut self, world: &mut GameWorld, _now: Instant, _mode: PollMode) {
        if world.is_over() {
            return;
        }

        let rng = &mut self.rng;
        world.advance(|| rng.gen_range(-1..=1));

        if let Some(reason) = world.reason() {
            info!(%reason, score = world.score(), "game over");
        }
    }
}
