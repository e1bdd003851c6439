//! Guessing strategies. A [Guesser] sees only the answer distribution, never the key, and produces
//! a guessed exam. A [Strategy] is either a guesser or the [Strategy::OracleCheat] reference
//! baseline, which is handed the key itself.

use crate::distribution::{Distribution, InvalidDistribution};
use crate::exam::Exam;
use crate::random;
use crate::shape::ExamShape;
use anyhow::bail;
use serde::{Serialize, Serializer};
use std::fmt::Formatter;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tinyrand::Rand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Guesser {
    /// Draws a guess from the distribution in the same way the key is drawn.
    RandomExam,

    /// Answers every question with the most frequent answer.
    GuessCommon,

    /// Drops the least frequent answer, scales the others back up to the exam length and draws a
    /// random guess from the result.
    EliminateAndScale,
}
impl Guesser {
    pub fn guess(
        &self,
        dist: &Distribution,
        shape: &ExamShape,
        rand: &mut impl Rand,
    ) -> Result<Exam, InvalidDistribution> {
        match self {
            Guesser::RandomExam => random::random_exam(dist, shape, rand),
            Guesser::GuessCommon => guess_common(dist, shape),
            Guesser::EliminateAndScale => {
                let scaled = eliminate_and_scale(dist, shape)?;
                random::random_exam(&scaled, shape, rand)
            }
        }
    }
}

pub fn guess_common(dist: &Distribution, shape: &ExamShape) -> Result<Exam, InvalidDistribution> {
    dist.validate(shape)?;
    Ok(Exam::uniform(dist.rank()[0], shape))
}

/// Zeroes the least frequent answer and rescales the survivors (rounding down) so that they sum
/// to the exam length again. The rounding shortfall is always added to answer 0, whether or not
/// answer 0 survived the elimination.
pub fn eliminate_and_scale(
    dist: &Distribution,
    shape: &ExamShape,
) -> Result<Distribution, InvalidDistribution> {
    dist.validate(shape)?;
    let exam_length = shape.exam_length as i64;
    let mut scaled = dist.clone();
    let least = dist.rank()[shape.options_per_question - 1];
    scaled[least] = 0;

    // nonzero for any valid distribution, since a valid shape has at least two options
    let survivors = scaled.sum() as i128;
    let mut counts: Vec<_> = scaled
        .counts()
        .iter()
        .map(|&count| (count as i128 * exam_length as i128 / survivors) as i64)
        .collect();
    let shortfall = exam_length - counts.iter().sum::<i64>();
    counts[0] += shortfall;
    Ok(Distribution::from(counts))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Guess(Guesser),
    OracleCheat,
}
impl Strategy {
    pub fn all() -> Vec<Strategy> {
        Guesser::iter()
            .map(Strategy::Guess)
            .chain(std::iter::once(Strategy::OracleCheat))
            .collect()
    }

    /// Produces a guess for the `key`. Only [Strategy::OracleCheat] looks at the key.
    pub fn attempt(
        &self,
        key: &Exam,
        dist: &Distribution,
        shape: &ExamShape,
        rand: &mut impl Rand,
    ) -> Result<Exam, InvalidDistribution> {
        match self {
            Strategy::Guess(guesser) => guesser.guess(dist, shape, rand),
            Strategy::OracleCheat => Ok(key.clone()),
        }
    }
}

const ORACLE_CHEAT: &str = "TrueCheater";

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Guess(guesser) => write!(f, "{guesser}"),
            Strategy::OracleCheat => write!(f, "{ORACLE_CHEAT}"),
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ORACLE_CHEAT {
            return Ok(Strategy::OracleCheat);
        }
        match Guesser::from_str(s) {
            Ok(guesser) => Ok(Strategy::Guess(guesser)),
            Err(_) => bail!("unknown strategy '{s}'"),
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Guesser> for Strategy {
    fn from(guesser: Guesser) -> Self {
        Strategy::Guess(guesser)
    }
}
