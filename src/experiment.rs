//! An [Experiment] pairs every listed strategy with every listed distribution. Invalid
//! distributions are reported and skipped; the remainder are assessed in turn.

use crate::assess::{assess_parallel, Assessment, AssessmentEngine};
use crate::distribution::{Distribution, InvalidDistribution};
use crate::shape::{ExamShape, DEFAULT_ITERATIONS};
use crate::strategy::Strategy;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experiment {
    pub shape: ExamShape,
    pub iterations: u64,
    pub strategies: Vec<String>,
    pub distributions: Vec<Distribution>,
}
impl Experiment {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.shape.validate()?;
        if self.iterations == 0 {
            bail!("at least one iteration is required");
        }
        if self.strategies.is_empty() {
            bail!("at least one strategy must be listed");
        }
        self.strategies()?;
        Ok(())
    }

    pub fn strategies(&self) -> Result<Vec<Strategy>, anyhow::Error> {
        self.strategies
            .iter()
            .map(|name| Strategy::from_str(name).with_context(|| format!("in experiment strategies {:?}", self.strategies)))
            .collect()
    }

    /// Assesses each strategy against each valid distribution. With a single worker, one random
    /// source seeded from `seed` serves the entire experiment; otherwise each assessment is spread
    /// over `workers` independently seeded sources.
    pub fn run(&self, seed: u64, workers: usize) -> Result<Vec<Outcome>, anyhow::Error> {
        self.validate()?;
        let strategies = self.strategies()?;
        let mut engine = AssessmentEngine::default()
            .with_shape(self.shape.clone())
            .with_iterations(self.iterations)
            .with_rand(StdRand::seed(seed));

        let mut outcomes = Vec::with_capacity(self.distributions.len());
        for (dist_index, dist) in self.distributions.iter().enumerate() {
            info!("using distribution {dist}");
            if let Err(error) = dist.validate(&self.shape) {
                warn!("invalid distribution {dist}: {error}");
                outcomes.push(Outcome::Invalid {
                    distribution: dist.clone(),
                    error,
                });
                continue;
            }

            let mut assessments = Vec::with_capacity(strategies.len());
            for (strategy_index, strategy) in strategies.iter().enumerate() {
                let assessment = if workers > 1 {
                    let pair_seed = seed
                        .wrapping_add((dist_index as u64) << 32)
                        .wrapping_add((strategy_index as u64) << 16);
                    assess_parallel(strategy, dist, &self.shape, self.iterations, workers, pair_seed)?
                } else {
                    engine.assess(strategy, dist)?
                };
                debug!("{strategy}: {assessment}");
                assessments.push(StrategyAssessment {
                    strategy: *strategy,
                    assessment,
                });
            }
            outcomes.push(Outcome::Assessed {
                distribution: dist.clone(),
                assessments,
            });
        }
        Ok(outcomes)
    }
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            shape: ExamShape::default(),
            iterations: DEFAULT_ITERATIONS,
            strategies: Strategy::all().iter().map(Strategy::to_string).collect(),
            distributions: vec![
                Distribution::from([25, 25, 25, 25]),
                Distribution::from([40, 25, 25, 10]),
                Distribution::from([50, 25, 25, 0]),
                Distribution::from([54, 25, 21, 0]),
                Distribution::from([54, 25, 11, 10]),
                Distribution::from([54, 20, 13, 13]),
                Distribution::from([100, 0, 0, 0]),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyAssessment {
    pub strategy: Strategy,
    pub assessment: Assessment,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Invalid {
        distribution: Distribution,
        #[serde(serialize_with = "serialize_display")]
        error: InvalidDistribution,
    },
    Assessed {
        distribution: Distribution,
        assessments: Vec<StrategyAssessment>,
    },
}
impl Outcome {
    pub fn distribution(&self) -> &Distribution {
        match self {
            Outcome::Invalid { distribution, .. } => distribution,
            Outcome::Assessed { distribution, .. } => distribution,
        }
    }
}

fn serialize_display<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
