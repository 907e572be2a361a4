use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Exercise, ExerciseProfile, Operation};

/// Number of answer options shown for every exercise, the correct one included.
pub const OPTION_COUNT: usize = 4;

/// Candidate draws allowed per widening round before the spread doubles.
const ATTEMPTS_PER_ROUND: u32 = 64;

/// Widening rounds before falling back to consecutive values above the answer.
const MAX_ROUNDS: u32 = 4;

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

/// Builds randomized arithmetic exercises for an [`ExerciseProfile`].
///
/// The generator holds no state; all randomness comes from the caller's RNG,
/// so a seeded RNG yields a reproducible exercise sequence.
///
/// # Examples
///
/// ```
/// # use lego_core::generator::ExerciseGenerator;
/// # use lego_core::model::ExerciseProfile;
/// use rand::SeedableRng;
///
/// let profile = ExerciseProfile::parse("7-9", "division", "facil")?;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let exercise = ExerciseGenerator::new().generate(profile, &mut rng);
///
/// assert_eq!(exercise.number1, exercise.number2 * exercise.correct_answer);
/// assert_eq!(exercise.options.len(), 4);
/// # Ok::<(), lego_core::model::ProfileError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseGenerator;

impl ExerciseGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a single exercise.
    pub fn generate<R: Rng + ?Sized>(&self, profile: ExerciseProfile, rng: &mut R) -> Exercise {
        let (number1, number2, correct_answer) = operands(profile, rng);
        let options = answer_options(profile.operation, correct_answer, rng);

        Exercise {
            number1,
            number2,
            operation: profile.operation,
            correct_answer,
            options,
        }
    }
}

/// Returns `(number1, number2, answer)` for the profile.
fn operands<R: Rng + ?Sized>(profile: ExerciseProfile, rng: &mut R) -> (u32, u32, u32) {
    match profile.operation {
        Operation::Suma => {
            let range = profile.age_group.operand_range(profile.level);
            let a = rng.random_range(range.clone());
            let b = rng.random_range(range);
            (a, b, a + b)
        }
        Operation::Resta => {
            let range = profile.age_group.operand_range(profile.level);
            let min = *range.start();
            let a = rng.random_range(range);
            let b = rng.random_range(min..=a);
            (a, b, a - b)
        }
        Operation::Multiplicacion => {
            let range = profile.level.factor_range();
            let a = rng.random_range(range.clone());
            let b = rng.random_range(range);
            (a, b, a * b)
        }
        Operation::Division => {
            let (divisors, quotients) = profile.level.division_ranges();
            let divisor = rng.random_range(divisors);
            let quotient = rng.random_range(quotients);
            (divisor * quotient, divisor, quotient)
        }
    }
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// The correct answer plus three distinct positive distractors, shuffled.
fn answer_options<R: Rng + ?Sized>(operation: Operation, answer: u32, rng: &mut R) -> Vec<u32> {
    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(answer);

    let mut spread = 1_i64;
    'rounds: for _ in 0..MAX_ROUNDS {
        for _ in 0..ATTEMPTS_PER_ROUND {
            if options.len() == OPTION_COUNT {
                break 'rounds;
            }
            let candidate = distractor_candidate(operation, i64::from(answer), spread, rng);
            if let Ok(value) = u32::try_from(candidate) {
                if value > 0 && !options.contains(&value) {
                    options.push(value);
                }
            }
        }
        spread *= 2;
    }

    let mut next = answer;
    while options.len() < OPTION_COUNT {
        next = next.saturating_add(1);
        if !options.contains(&next) {
            options.push(next);
        }
    }

    options.shuffle(rng);
    options
}

/// One wrong-answer candidate; may be non-positive or a duplicate.
fn distractor_candidate<R: Rng + ?Sized>(
    operation: Operation,
    answer: i64,
    spread: i64,
    rng: &mut R,
) -> i64 {
    if operation == Operation::Division && answer < 10 {
        let low = (answer - 5 * spread).max(1);
        let high = answer + 5 * spread;
        return rng.random_range(low..=high);
    }

    let max_offset = (answer / 2).max(5) * spread;
    let offset = rng.random_range(1..=max_offset);
    if rng.random_bool(0.5) {
        answer + offset
    } else {
        answer - offset
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
