//! A [Distribution] is the number of times each answer is correct across an exam. It is an input
//! to the simulation; any exam can also report its own distribution.

use crate::exam::Answer;
use crate::shape::{ExamShape, InvalidShape};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidDistribution {
    #[error("{0}")]
    InvalidShape(#[from] InvalidShape),

    #[error("expected counts for {expected} options, got {actual}")]
    WrongOptionCount { expected: usize, actual: usize },

    #[error("count {count} for answer {answer} is negative")]
    NegativeCount { answer: Answer, count: i64 },

    #[error("count {count} for answer {answer} exceeds the exam length {exam_length}")]
    CountExceedsLength {
        answer: Answer,
        count: i64,
        exam_length: usize,
    },

    #[error("counts sum to {actual}, expected the exam length {expected}")]
    WrongSum { expected: usize, actual: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: Vec<i64>,
}
impl Distribution {
    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    pub fn options(&self) -> usize {
        self.counts.len()
    }

    /// Sum of the counts, saturating at the bounds of `i64`.
    pub fn sum(&self) -> i64 {
        self.counts.iter().fold(0i64, |sum, &count| sum.saturating_add(count))
    }

    pub fn is_valid(&self, shape: &ExamShape) -> bool {
        self.validate(shape).is_ok()
    }

    /// A valid distribution has one count per option, each in `0..=exam_length`, summing to the
    /// exam length. The shape itself is validated first.
    pub fn validate(&self, shape: &ExamShape) -> Result<(), InvalidDistribution> {
        shape.validate()?;
        if self.counts.len() != shape.options_per_question {
            return Err(InvalidDistribution::WrongOptionCount {
                expected: shape.options_per_question,
                actual: self.counts.len(),
            });
        }
        if let Some((index, &count)) = self.counts.iter().enumerate().find(|&(_, &count)| count < 0) {
            return Err(InvalidDistribution::NegativeCount {
                answer: Answer::index(index),
                count,
            });
        }
        let exam_length = shape.exam_length as i64;
        if let Some((index, &count)) = self.counts.iter().enumerate().find(|&(_, &count)| count > exam_length) {
            return Err(InvalidDistribution::CountExceedsLength {
                answer: Answer::index(index),
                count,
                exam_length: shape.exam_length,
            });
        }
        let sum = self.sum();
        if sum != exam_length {
            return Err(InvalidDistribution::WrongSum {
                expected: shape.exam_length,
                actual: sum,
            });
        }
        Ok(())
    }

    /// Orders the answers from most to least frequent. Equally frequent answers retain their
    /// ascending index order, so the ranking of a given distribution never varies.
    pub fn rank(&self) -> Vec<Answer> {
        let mut ranked: Vec<_> = (0..self.counts.len()).map(Answer::index).collect();
        ranked.sort_by(|a, b| self[*b].cmp(&self[*a]));
        ranked
    }
}

impl From<Vec<i64>> for Distribution {
    fn from(counts: Vec<i64>) -> Self {
        Self { counts }
    }
}

impl<const N: usize> From<[i64; N]> for Distribution {
    fn from(counts: [i64; N]) -> Self {
        Self {
            counts: counts.to_vec(),
        }
    }
}

impl Index<Answer> for Distribution {
    type Output = i64;

    fn index(&self, answer: Answer) -> &Self::Output {
        &self.counts[answer.as_index()]
    }
}

impl IndexMut<Answer> for Distribution {
    fn index_mut(&mut self, answer: Answer) -> &mut Self::Output {
        &mut self.counts[answer.as_index()]
    }
}

impl Display for Distribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let len = self.counts.len();
        for (index, count) in self.counts.iter().enumerate() {
            write!(f, "{count}")?;
            if index != len - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
