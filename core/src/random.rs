use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Source of the independent random draws every game makes (mine placement,
/// food position, tile spawns, pipe gaps).
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform integer in `0..bound`; `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32 {
        let pick = (self.unit() * bound as f32) as u32;
        pick.min(bound.saturating_sub(1))
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        f64::from(self.unit()) < p
    }
}

impl RandomSource for SmallRng {
    fn unit(&mut self) -> f32 {
        self.random()
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }
}

/// Random source the shell hands to each game.
pub type ArcadeRng = SmallRng;

pub fn seeded_rng(seed: u64) -> ArcadeRng {
    SmallRng::seed_from_u64(seed)
}

/// Replays a fixed cycle of unit draws, making every game fully reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedRandom {
    draws: Vec<f32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}
