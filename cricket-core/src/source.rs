//! Random source threaded through every draw the engine makes.

use crate::model::{Delivery, Mood, Outcome};
use crate::tables::{select_outcome, WeightTable};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait BallSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    fn outcome(&mut self, table: &WeightTable, mood: Option<Mood>) -> Outcome {
        select_outcome(table, mood, self)
    }

    /// Ball the computer bowler sends down in a full match.
    fn delivery(&mut self) -> Delivery {
        Delivery::ALL[self.pick(Delivery::ALL.len())]
    }
}

/// Production source backed by a seeded rng.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BallSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Plays back queued outcomes and deliveries in order, then falls back to a
/// seeded rng. Used for replays and scripted scenarios.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    outcomes: VecDeque<Outcome>,
    deliveries: VecDeque<Delivery>,
    fallback: RngSource<SmallRng>,
}

impl ScriptedSource {
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>, seed: u64) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            deliveries: VecDeque::new(),
            fallback: RngSource::seeded(seed),
        }
    }

    pub fn with_deliveries(mut self, deliveries: impl IntoIterator<Item = Delivery>) -> Self {
        self.deliveries = deliveries.into_iter().collect();
        self
    }

    pub fn push_outcome(&mut self, outcome: Outcome) {
        self.outcomes.push_back(outcome);
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl BallSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.fallback.unit()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.fallback.pick(len)
    }

    fn outcome(&mut self, table: &WeightTable, mood: Option<Mood>) -> Outcome {
        match self.outcomes.pop_front() {
            Some(outcome) => outcome,
            None => self.fallback.outcome(table, mood),
        }
    }

    fn delivery(&mut self) -> Delivery {
        match self.deliveries.pop_front() {
            Some(delivery) => delivery,
            None => self.fallback.delivery(),
        }
    }
}
