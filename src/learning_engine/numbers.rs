//! Operand ranges and random drawing: the generator's random primitive.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::learning_engine::models::DigitLevel;

/// Inclusive operand range for a digit level.
pub fn operand_range(difficulty: DigitLevel) -> RangeInclusive<u32> {
    match difficulty {
        DigitLevel::Single => 1..=9,
        DigitLevel::Double => 10..=99,
        DigitLevel::Triple => 100..=999,
        DigitLevel::Four   => 1_000..=9_999,
        DigitLevel::Five   => 10_000..=99_999,
    }
}

/// Draw one operand uniformly from the level's range.
pub fn draw_operand<R: Rng>(rng: &mut R, difficulty: DigitLevel) -> u32 {
    rng.gen_range(operand_range(difficulty))
}

/// Ones digit of an operand.
pub fn last_digit(n: u32) -> u32 {
    n % 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_inside_their_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in DigitLevel::ALL {
            let range = operand_range(difficulty);
            for _ in 0..200 {
                let n = draw_operand(&mut rng, difficulty);
                assert!(range.contains(&n), "{n} outside {range:?} for {difficulty:?}");
            }
        }
    }

    #[test]
    fn drawing_is_deterministic_with_seed() {
        let draw_five = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5).map(|_| draw_operand(&mut rng, DigitLevel::Double)).collect()
        };
        assert_eq!(draw_five(99), draw_five(99));
        assert_ne!(draw_five(99), draw_five(100));
    }

    #[test]
    fn last_digit_of_multi_digit_operands() {
        assert_eq!(last_digit(7), 7);
        assert_eq!(last_digit(40), 0);
        assert_eq!(last_digit(123), 3);
        assert_eq!(last_digit(99_999), 9);
    }
}
