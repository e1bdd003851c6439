//! A Monte Carlo harness for guessing strategies on a multiple-choice exam. The distribution of
//! correct answers is known but the answers themselves are not. Each trial draws a random key
//! consistent with the distribution, lets a strategy guess from the distribution alone, and
//! grades the guess. Assessments report the average grade and the probability of passing.

pub mod assess;
pub mod distribution;
pub mod exam;
pub mod experiment;
pub mod file;
pub mod print;
pub mod random;
pub mod shape;
pub mod strategy;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
