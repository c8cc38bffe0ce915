//! Digit-pair technique classification.
//!
//! For a single-digit addition or subtraction, decides which complement
//! technique the pair requires on the board. The rules below induce one
//! deterministic 10×10 table per operation; the tables are built once and
//! cached, and rebuilding them always gives identical results.

use once_cell::sync::Lazy;

use crate::learning_engine::models::{Operation, Technique};

static ADDITION_TABLE: Lazy<[[Technique; 10]; 10]> =
    Lazy::new(|| build_table(Operation::Addition));

static SUBTRACTION_TABLE: Lazy<[[Technique; 10]; 10]> =
    Lazy::new(|| build_table(Operation::Subtraction));

fn build_table(operation: Operation) -> [[Technique; 10]; 10] {
    let mut table = [[Technique::None; 10]; 10];
    for a in 0..10u8 {
        for b in 0..10u8 {
            table[a as usize][b as usize] = classify_pair(operation, a, b);
        }
    }
    table
}

/// Rule evaluation, first match wins.
fn classify_pair(operation: Operation, a: u8, b: u8) -> Technique {
    match operation {
        Operation::Addition => classify_addition(a, b),
        Operation::Subtraction => classify_subtraction(a, b),
        Operation::Mixed => {
            panic!("Mixed must be resolved to Addition or Subtraction before classification")
        }
    }
}

fn classify_addition(a: u8, b: u8) -> Technique {
    let sum = a + b;
    if sum >= 10 {
        Technique::BigFriend
    } else if a < 5 && b < 5 && sum >= 5 {
        Technique::SmallFriend
    } else if a >= 5 && b > 5 && sum < 15 {
        // Shadowed by the big-friend rule (a >= 5, b > 5 implies sum >= 11);
        // kept so the rule set stays complete.
        Technique::Family
    } else {
        Technique::None
    }
}

fn classify_subtraction(a: u8, b: u8) -> Technique {
    let diff = i16::from(a) - i16::from(b);
    if diff < 0 && b > 0 {
        Technique::BigFriend
    } else if a >= 5 && b < 5 && diff < 5 {
        Technique::SmallFriend
    } else if a < 5 && b > 5 && diff >= -5 {
        // Shadowed by the big-friend rule (a < 5, b > 5 implies diff < 0);
        // kept so the rule set stays complete.
        Technique::Family
    } else {
        Technique::None
    }
}

/// Classify one digit pair for a resolved operation.
///
/// For addition `a` and `b` are the two addends; for subtraction `a` is
/// the minuend and `b` the subtrahend. Panics on digits outside 0–9 or on
/// `Operation::Mixed`; both are contract violations, not runtime states.
pub fn classify(operation: Operation, a: u8, b: u8) -> Technique {
    assert!(a <= 9 && b <= 9, "digits must be 0-9, got {a} and {b}");
    let table = match operation {
        Operation::Addition => &*ADDITION_TABLE,
        Operation::Subtraction => &*SUBTRACTION_TABLE,
        Operation::Mixed => {
            panic!("Mixed must be resolved to Addition or Subtraction before classification")
        }
    };
    table[a as usize][b as usize]
}

/// All partner digits `d` with `classify(operation, digit, d) == technique`,
/// in ascending order. For subtraction, `digit` is the minuend.
pub fn friends_of(digit: u8, operation: Operation, technique: Technique) -> Vec<u8> {
    (0..10u8)
        .filter(|&d| classify(operation, digit, d) == technique)
        .collect()
}

/// All first operands that have at least one partner satisfying
/// `technique`, in ascending order.
pub fn first_digits_with(operation: Operation, technique: Technique) -> Vec<u8> {
    (0..10u8)
        .filter(|&a| (0..10u8).any(|b| classify(operation, a, b) == technique))
        .collect()
}
