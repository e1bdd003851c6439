//! The fixed shape of an exam: how many questions it has, how many options each question
//! offers, and the grade needed to pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Longest supported exam. Keeps every count product well inside `i64`.
pub const MAX_EXAM_LENGTH: usize = u32::MAX as usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidShape {
    #[error("exam length must be positive")]
    EmptyExam,

    #[error("exam length {0} exceeds the maximum of {MAX_EXAM_LENGTH}")]
    ExamTooLong(usize),

    #[error("there must be at least two options per question")]
    TooFewOptions,

    #[error("pass grade {pass_grade} cannot exceed the exam length {exam_length}")]
    PassGradeTooHigh { pass_grade: usize, exam_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamShape {
    pub exam_length: usize,
    pub options_per_question: usize,
    pub pass_grade: usize,
}
impl ExamShape {
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if self.exam_length == 0 {
            return Err(InvalidShape::EmptyExam);
        }
        if self.exam_length > MAX_EXAM_LENGTH {
            return Err(InvalidShape::ExamTooLong(self.exam_length));
        }
        if self.options_per_question < 2 {
            return Err(InvalidShape::TooFewOptions);
        }
        if self.pass_grade > self.exam_length {
            return Err(InvalidShape::PassGradeTooHigh {
                pass_grade: self.pass_grade,
                exam_length: self.exam_length,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub fn passes(&self, grade: usize) -> bool {
        grade >= self.pass_grade
    }
}

impl Default for ExamShape {
    fn default() -> Self {
        Self {
            exam_length: 100,
            options_per_question: 4,
            pass_grade: 55,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let shape = ExamShape::default();
        shape.validate().unwrap();
        assert_eq!(100, shape.exam_length);
        assert_eq!(4, shape.options_per_question);
        assert_eq!(55, shape.pass_grade);
    }

    #[test]
    fn passes() {
        let shape = ExamShape::default();
        assert!(!shape.passes(54));
        assert!(shape.passes(55));
        assert!(shape.passes(100));
    }

    #[test]
    fn validate_errors() {
        assert_eq!(
            "exam length must be positive",
            ExamShape {
                exam_length: 0,
                options_per_question: 4,
                pass_grade: 0
            }
            .validate()
            .err()
            .unwrap()
            .to_string()
        );
        assert_eq!(
            "there must be at least two options per question",
            ExamShape {
                exam_length: 10,
                options_per_question: 1,
                pass_grade: 5
            }
            .validate()
            .err()
            .unwrap()
            .to_string()
        );
        assert_eq!(
            "pass grade 11 cannot exceed the exam length 10",
            ExamShape {
                exam_length: 10,
                options_per_question: 4,
                pass_grade: 11
            }
            .validate()
            .err()
            .unwrap()
            .to_string()
        );
    }

    #[test]
    fn validate_too_long() {
        assert_eq!(
            Err(InvalidShape::ExamTooLong(MAX_EXAM_LENGTH + 1)),
            ExamShape {
                exam_length: MAX_EXAM_LENGTH + 1,
                options_per_question: 4,
                pass_grade: 1
            }
            .validate()
        );
    }

    #[test]
    fn from_json() {
        let shape: ExamShape = serde_json::from_str(
            r#"{"exam_length": 20, "options_per_question": 5, "pass_grade": 12}"#,
        )
        .unwrap();
        assert_eq!(
            ExamShape {
                exam_length: 20,
                options_per_question: 5,
                pass_grade: 12
            },
            shape
        );
    }
}
