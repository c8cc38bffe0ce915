//! Constrained question generation.
//!
//! `generate_question` draws operands for the requested digit level and,
//! when a technique flag is set, redraws until the pair exercises that
//! technique. Every redraw loop is bounded: after [`RETRY_BUDGET`]
//! iterations the last-drawn pair is returned as-is. The contract is best
//! effort, never an error and never an unbounded loop.
//!
//! The two flags read different numeric views. Small-friend checks the
//! last digits only; big-friend (addition) checks the full sum; subtraction
//! redraws for small-friend borrows but has no big-friend loop at all.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::learning_engine::{
    models::{Operation, Question, QuestionRequest},
    numbers::{draw_operand, last_digit},
};

/// Redraws allowed per constraint loop before accepting the current pair.
const RETRY_BUDGET: u32 = 50;

/// Generate one question from a request, seeding the RNG from
/// `request.rng_seed` (entropy when `None`).
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_question_with_rng(&mut rng, &request)
}

/// Generate one question using an injected random source.
pub fn generate_question_with_rng<R: Rng>(rng: &mut R, request: &QuestionRequest) -> Question {
    let operation = match request.operation {
        Operation::Mixed => {
            if rng.gen_bool(0.5) {
                Operation::Addition
            } else {
                Operation::Subtraction
            }
        }
        resolved => resolved,
    };

    match operation {
        Operation::Addition => generate_addition(rng, request),
        Operation::Subtraction => generate_subtraction(rng, request),
        Operation::Mixed => unreachable!("mixed resolved above"),
    }
}

fn generate_addition<R: Rng>(rng: &mut R, request: &QuestionRequest) -> Question {
    let difficulty = request.difficulty;
    let mut a = draw_operand(rng, difficulty);
    let mut b = draw_operand(rng, difficulty);

    if request.require_small_friend {
        // Last-digit carry; the full values are not consulted.
        let mut tries = 0;
        while last_digit(a) + last_digit(b) <= 9 {
            if tries >= RETRY_BUDGET {
                trace!(a, b, "small-friend constraint unmet after retry budget");
                break;
            }
            b = draw_operand(rng, difficulty);
            tries += 1;
        }
    }

    if request.require_big_friend {
        // Full-sum carry, with no last-digit carry already present.
        let mut tries = 0;
        while a + b < 10 && last_digit(a) + last_digit(b) <= 9 {
            if tries >= RETRY_BUDGET {
                trace!(a, b, "big-friend constraint unmet after retry budget");
                break;
            }
            a = draw_operand(rng, difficulty);
            b = draw_operand(rng, difficulty);
            tries += 1;
        }
    }

    Question {
        operands: [a, b],
        operation: Operation::Addition,
        answer: a + b,
    }
}

fn generate_subtraction<R: Rng>(rng: &mut R, request: &QuestionRequest) -> Question {
    let difficulty = request.difficulty;
    let mut a = draw_operand(rng, difficulty);
    let mut b = draw_operand(rng, difficulty);
    if b > a {
        std::mem::swap(&mut a, &mut b);
    }

    if request.require_small_friend {
        // Force a borrow: minuend's last digit below the subtrahend's.
        // Each redraw re-orders the pair so the answer stays non-negative.
        let mut tries = 0;
        while last_digit(a) >= last_digit(b) {
            if tries >= RETRY_BUDGET {
                trace!(
                    minuend = a,
                    subtrahend = b,
                    "borrow constraint unmet after retry budget"
                );
                break;
            }
            b = draw_operand(rng, difficulty);
            if b > a {
                std::mem::swap(&mut a, &mut b);
            }
            tries += 1;
        }
    }

    Question {
        operands: [a, b],
        operation: Operation::Subtraction,
        answer: a - b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning_engine::models::DigitLevel;
    use crate::learning_engine::numbers::operand_range;

    #[test]
    fn same_seed_produces_identical_question() {
        let mut request = QuestionRequest::new(DigitLevel::Double, Operation::Mixed);
        request.rng_seed = Some(12_345);
        let a = generate_question(request);
        let b = generate_question(request);
        assert_eq!(a, b);
    }

    #[test]
    fn mixed_resolves_to_both_operations_across_seeds() {
        let mut additions = 0usize;
        let mut subtractions = 0usize;
        for seed in 0..100u64 {
            let mut request = QuestionRequest::new(DigitLevel::Single, Operation::Mixed);
            request.rng_seed = Some(seed);
            match generate_question(request).operation {
                Operation::Addition => additions += 1,
                Operation::Subtraction => subtractions += 1,
                Operation::Mixed => panic!("returned question kept Mixed"),
            }
        }
        assert!(additions > 0 && subtractions > 0);
    }

    #[test]
    fn operands_respect_every_difficulty() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in DigitLevel::ALL {
            let range = operand_range(difficulty);
            for _ in 0..50 {
                let request = QuestionRequest::new(difficulty, Operation::Mixed);
                let q = generate_question_with_rng(&mut rng, &request);
                assert!(range.contains(&q.operands[0]));
                assert!(range.contains(&q.operands[1]));
            }
        }
    }

    #[test]
    fn answers_are_exact() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let request = QuestionRequest::new(DigitLevel::Triple, Operation::Mixed);
            let q = generate_question_with_rng(&mut rng, &request);
            let expected = match q.operation {
                Operation::Addition => q.operands[0] + q.operands[1],
                Operation::Subtraction => q.operands[0] - q.operands[1],
                Operation::Mixed => unreachable!(),
            };
            assert_eq!(q.answer, expected);
            assert!(q.check(expected));
        }
    }

    #[test]
    fn forced_borrow_in_double_digit_subtraction() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut request = QuestionRequest::new(DigitLevel::Double, Operation::Subtraction);
        request.require_small_friend = true;
        let mut satisfied = 0usize;
        let total = 500usize;
        for _ in 0..total {
            let q = generate_question_with_rng(&mut rng, &request);
            assert!(q.operands[0] >= q.operands[1]);
            if last_digit(q.operands[0]) < last_digit(q.operands[1]) {
                satisfied += 1;
            }
        }
        // Best-effort contract: the budget makes misses possible but rare.
        assert!(satisfied >= total * 95 / 100, "only {satisfied}/{total} forced a borrow");
    }
}
