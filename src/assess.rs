//! Monte Carlo assessment of a [Strategy] against a [Distribution]. Each trial draws a fresh key
//! from the distribution, asks the strategy for a guess, and grades the guess against the key.

use crate::distribution::{Distribution, InvalidDistribution};
use crate::exam::Grade;
use crate::random;
use crate::shape::{ExamShape, DEFAULT_ITERATIONS};
use crate::strategy::Strategy;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tinyrand::{Rand, Seeded, StdRand};
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessError {
    #[error("{0}")]
    InvalidDistribution(#[from] InvalidDistribution),

    #[error("at least one iteration is required")]
    NoIterations,
}

/// Running totals over a batch of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub trials: u64,
    pub total_grade: u64,
    pub passes: u64,
}
impl Assessment {
    #[inline]
    pub fn record(&mut self, grade: Grade, shape: &ExamShape) {
        self.trials += 1;
        self.total_grade += grade as u64;
        if shape.passes(grade) {
            self.passes += 1;
        }
    }

    pub fn merge(mut self, other: Assessment) -> Assessment {
        self.trials += other.trials;
        self.total_grade += other.total_grade;
        self.passes += other.passes;
        self
    }

    pub fn average_grade(&self) -> f64 {
        self.total_grade as f64 / self.trials as f64
    }

    pub fn pass_probability(&self) -> f64 {
        self.passes as f64 / self.trials as f64
    }
}

impl Display for Assessment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "average grade: {:.3}, pass probability: {:.6}",
            self.average_grade(),
            self.pass_probability()
        )
    }
}

pub struct AssessmentEngine<R: Rand> {
    shape: ExamShape,
    iterations: u64,
    rand: R,
}
impl<R: Rand> AssessmentEngine<R> {
    pub fn with_shape(self, shape: ExamShape) -> Self {
        Self { shape, ..self }
    }

    pub fn with_iterations(self, iterations: u64) -> Self {
        Self { iterations, ..self }
    }

    pub fn with_rand<S: Rand>(self, rand: S) -> AssessmentEngine<S> {
        AssessmentEngine {
            shape: self.shape,
            iterations: self.iterations,
            rand,
        }
    }

    pub fn shape(&self) -> &ExamShape {
        &self.shape
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Runs the configured number of trials on this thread. The distribution is validated before
    /// any trial starts.
    pub fn assess(
        &mut self,
        strategy: &Strategy,
        dist: &Distribution,
    ) -> Result<Assessment, AssessError> {
        if self.iterations == 0 {
            return Err(AssessError::NoIterations);
        }
        dist.validate(&self.shape)?;
        let assessment = run_trials(strategy, dist, &self.shape, self.iterations, &mut self.rand)?;
        debug!("{strategy} against {dist}: {assessment}");
        Ok(assessment)
    }
}

impl Default for AssessmentEngine<StdRand> {
    fn default() -> Self {
        Self {
            shape: ExamShape::default(),
            iterations: DEFAULT_ITERATIONS,
            rand: StdRand::default(),
        }
    }
}

/// Spreads `iterations` trials across `workers` rayon tasks, each seeded from `seed` and its own
/// index, then merges the partial totals.
pub fn assess_parallel(
    strategy: &Strategy,
    dist: &Distribution,
    shape: &ExamShape,
    iterations: u64,
    workers: usize,
    seed: u64,
) -> Result<Assessment, AssessError> {
    if iterations == 0 {
        return Err(AssessError::NoIterations);
    }
    dist.validate(shape)?;
    let workers = workers.clamp(1, iterations as usize) as u64;
    let assessment = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let share = iterations / workers + u64::from(worker < iterations % workers);
            let mut rand = StdRand::seed(seed.wrapping_add(worker));
            run_trials(strategy, dist, shape, share, &mut rand)
        })
        .try_reduce(Assessment::default, |a, b| Ok(a.merge(b)))?;
    debug!("{strategy} against {dist} on {workers} workers: {assessment}");
    Ok(assessment)
}

fn run_trials(
    strategy: &Strategy,
    dist: &Distribution,
    shape: &ExamShape,
    iterations: u64,
    rand: &mut impl Rand,
) -> Result<Assessment, InvalidDistribution> {
    let mut assessment = Assessment::default();
    for _ in 0..iterations {
        let key = random::random_exam(dist, shape, rand)?;
        let guess = strategy.attempt(&key, dist, shape, rand)?;
        assessment.record(key.check(&guess), shape);
    }
    Ok(assessment)
}
