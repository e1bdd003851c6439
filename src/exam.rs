//! An [Exam] is a fixed-length sequence of [Answer]s, one per question. The same type serves as
//! the key (the correct answers) and as an attempt at answering; only the usage differs.

use crate::distribution::Distribution;
use crate::shape::ExamShape;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The number of questions on which two exams agree.
pub type Grade = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Answer(usize);

impl Answer {
    pub fn index(index: usize) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> usize {
        self.0
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedExam {
    #[error("expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("answer {answer} at question {question} is outside the {options} available options")]
    AnswerOutOfRange {
        question: usize,
        answer: Answer,
        options: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    answers: Vec<Answer>,
}
impl Exam {
    /// Constructs an exam from externally supplied answers, checking the length and that every
    /// answer is one of the options in `shape`.
    pub fn try_from_answers(answers: Vec<Answer>, shape: &ExamShape) -> Result<Self, MalformedExam> {
        if answers.len() != shape.exam_length {
            return Err(MalformedExam::WrongLength {
                expected: shape.exam_length,
                actual: answers.len(),
            });
        }
        if let Some((question, &answer)) = answers
            .iter()
            .enumerate()
            .find(|(_, answer)| answer.as_index() >= shape.options_per_question)
        {
            return Err(MalformedExam::AnswerOutOfRange {
                question,
                answer,
                options: shape.options_per_question,
            });
        }
        Ok(Self { answers })
    }

    /// Answers every question in `shape` with the same `answer`.
    pub fn uniform(answer: Answer, shape: &ExamShape) -> Self {
        debug_assert!(answer.as_index() < shape.options_per_question);
        Self {
            answers: vec![answer; shape.exam_length],
        }
    }

    pub(crate) fn from_trusted(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Grades `other` against this exam. The result is symmetric.
    ///
    /// # Panics
    /// If the exams differ in length. See [Exam::try_check] for a fallible variant.
    #[inline]
    pub fn check(&self, other: &Exam) -> Grade {
        assert_eq!(
            self.answers.len(),
            other.answers.len(),
            "exams of different lengths cannot be compared"
        );
        self.count_matches(other)
    }

    /// Grades `other` against this exam, rejecting an exam of a different length.
    pub fn try_check(&self, other: &Exam) -> Result<Grade, MalformedExam> {
        if self.answers.len() != other.answers.len() {
            return Err(MalformedExam::WrongLength {
                expected: self.answers.len(),
                actual: other.answers.len(),
            });
        }
        Ok(self.count_matches(other))
    }

    #[inline(always)]
    fn count_matches(&self, other: &Exam) -> Grade {
        self.answers
            .iter()
            .zip(other.answers.iter())
            .filter(|(ours, theirs)| ours == theirs)
            .count()
    }

    /// Counts each answer in this exam.
    ///
    /// # Panics
    /// If an answer lies outside the options of `shape`, which happens only when the exam was built
    /// for a wider shape. See [Exam::try_distribution] for a fallible variant.
    pub fn distribution(&self, shape: &ExamShape) -> Distribution {
        match self.try_distribution(shape) {
            Ok(dist) => dist,
            Err(err) => panic!("{err}"),
        }
    }

    /// Counts each answer in this exam, rejecting answers outside the options of `shape`.
    pub fn try_distribution(&self, shape: &ExamShape) -> Result<Distribution, MalformedExam> {
        let mut counts = vec![0; shape.options_per_question];
        for (question, &answer) in self.answers.iter().enumerate() {
            match counts.get_mut(answer.as_index()) {
                Some(count) => *count += 1,
                None => {
                    return Err(MalformedExam::AnswerOutOfRange {
                        question,
                        answer,
                        options: shape.options_per_question,
                    })
                }
            }
        }
        Ok(Distribution::from(counts))
    }
}
