//! Generation of random exams that exactly match a target [Distribution]. Every assignment of the
//! implied multiset of answers to question positions is equally likely.

use crate::distribution::{Distribution, InvalidDistribution};
use crate::exam::{Answer, Exam};
use crate::shape::ExamShape;
use tinyrand::Rand;

/// Generates an exam whose own distribution equals `dist`, with answers shuffled uniformly across
/// the questions. The distribution is validated first; `dist` is never modified.
pub fn random_exam(
    dist: &Distribution,
    shape: &ExamShape,
    rand: &mut impl Rand,
) -> Result<Exam, InvalidDistribution> {
    dist.validate(shape)?;
    let sorted = fill_sorted(dist, shape.exam_length);
    let perm = permutation(shape.exam_length, rand);
    let mut scattered = vec![Answer::index(0); shape.exam_length];
    for (index, &position) in perm.iter().enumerate() {
        scattered[position] = sorted[index];
    }
    Ok(Exam::from_trusted(scattered))
}

/// Lays the answers out in ascending order, each repeated as many times as its count. Requires a
/// validated distribution.
fn fill_sorted(dist: &Distribution, exam_length: usize) -> Vec<Answer> {
    let mut budget = dist.clone();
    let mut sorted = Vec::with_capacity(exam_length);
    let mut answer = Answer::index(0);
    while sorted.len() < exam_length {
        if budget[answer] == 0 {
            answer = Answer::index(answer.as_index() + 1);
        } else {
            sorted.push(answer);
            budget[answer] -= 1;
        }
    }
    sorted
}

/// A uniformly random permutation of `0..len`, drawn with a Fisher–Yates shuffle.
pub fn permutation(len: usize, rand: &mut impl Rand) -> Vec<usize> {
    let mut perm: Vec<_> = (0..len).collect();
    for index in (1..len).rev() {
        let other = rand.next_lim_usize(index + 1);
        perm.swap(index, other);
    }
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrand::{Seeded, StdRand};

    #[test]
    fn fill_sorted_in_answer_order() {
        let sorted = fill_sorted(&Distribution::from([2, 0, 3, 1]), 6);
        let indexes: Vec<_> = sorted.iter().map(Answer::as_index).collect();
        assert_eq!(vec![0, 0, 2, 2, 2, 3], indexes);
    }

    #[test]
    fn permutation_contains_every_index() {
        let mut rand = StdRand::seed(7);
        for len in [0, 1, 2, 10, 100] {
            let mut perm = permutation(len, &mut rand);
            perm.sort();
            assert_eq!((0..len).collect::<Vec<_>>(), perm);
        }
    }

    #[test]
    fn permutation_is_roughly_uniform() {
        const TRIALS: usize = 60_000;
        let mut rand = StdRand::seed(11);
        let mut first_position = [0usize; 3];
        for _ in 0..TRIALS {
            let perm = permutation(3, &mut rand);
            first_position[perm[0]] += 1;
        }
        for count in first_position {
            let share = count as f64 / TRIALS as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share} is not near 1/3");
        }
    }

    #[test]
    fn random_exam_matches_distribution() {
        let shape = ExamShape::default();
        let mut rand = StdRand::seed(42);
        for dist in [
            Distribution::from([25, 25, 25, 25]),
            Distribution::from([40, 25, 25, 10]),
            Distribution::from([54, 25, 21, 0]),
            Distribution::from([0, 0, 0, 100]),
        ] {
            for _ in 0..20 {
                let exam = random_exam(&dist, &shape, &mut rand).unwrap();
                assert_eq!(shape.exam_length, exam.len());
                assert_eq!(dist, exam.distribution(&shape));
            }
        }
    }

    #[test]
    fn random_exam_does_not_modify_input() {
        let dist = Distribution::from([40, 25, 25, 10]);
        let copy = dist.clone();
        random_exam(&dist, &ExamShape::default(), &mut StdRand::seed(1)).unwrap();
        assert_eq!(copy, dist);
    }

    #[test]
    fn random_exam_is_shuffled() {
        let shape = ExamShape::default();
        let dist = Distribution::from([25, 25, 25, 25]);
        let mut rand = StdRand::seed(3);
        let first = random_exam(&dist, &shape, &mut rand).unwrap();
        let second = random_exam(&dist, &shape, &mut rand).unwrap();
        assert_ne!(first, second);
        assert_ne!(first, Exam::from_trusted(fill_sorted(&dist, shape.exam_length)));
    }

    #[test]
    fn random_exam_reproducible_with_seed() {
        let shape = ExamShape::default();
        let dist = Distribution::from([40, 25, 25, 10]);
        let first = random_exam(&dist, &shape, &mut StdRand::seed(99)).unwrap();
        let second = random_exam(&dist, &shape, &mut StdRand::seed(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_exam_rejects_invalid() {
        let shape = ExamShape::default();
        let mut rand = StdRand::default();
        assert_eq!(
            Err(InvalidDistribution::WrongSum {
                expected: 100,
                actual: 99
            }),
            random_exam(&Distribution::from([24, 25, 25, 25]), &shape, &mut rand)
        );
        assert_eq!(
            Err(InvalidDistribution::NegativeCount {
                answer: Answer::index(0),
                count: -1
            }),
            random_exam(&Distribution::from([-1, 26, 25, 50]), &shape, &mut rand)
        );
    }
}
