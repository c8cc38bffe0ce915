//! End-to-end walkthrough of the learning engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `sempoa_trainer` works end to end:
//!
//! 1. **Technique classification** — the full 10×10 table for addition and
//!    subtraction, plus the derived friend lookups.
//! 2. **Constrained questions** — one question per complement requirement
//!    with fixed seeds, so the output is deterministic and reproducible.
//! 3. **A mastery run** — a fresh learner answers the first level to
//!    completion and the unlock chain advances.
//! 4. **The bead codec** — a value rendered as active bead keys and summed
//!    back.
//!
//! ## Key concepts demonstrated
//!
//! - `QuestionRequest::new(difficulty, operation)` — minimal constructor;
//!   no technique flags, entropy seed.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - `QuestionRequest::for_level` maps a curriculum level onto generator
//!   flags, which is exactly what a board UI does per activation.
//! - Progression functions are pure: state in, state out, store injected.

use sempoa_trainer::{
    classify, completion_percentage, current_level, friends_of, generate_question,
    initialize_progress, record_correct_answer, record_incorrect_answer, section_progress,
    BoardLayout, ComplementRequirement, DigitLevel, MasterySettings, MemoryStore, Operation,
    QuestionRequest, Technique, PROGRESS_KEY,
};

/// One-character cell for the classification table.
fn cell(technique: Technique) -> &'static str {
    match technique {
        Technique::None        => "·",
        Technique::SmallFriend => "s",
        Technique::BigFriend   => "B",
        Technique::Family      => "f",
    }
}

fn print_table(operation: Operation) {
    println!("  {} table (rows = first digit, columns = second digit):", operation);
    println!("      0 1 2 3 4 5 6 7 8 9");
    for a in 0..10u8 {
        let row: Vec<&str> = (0..10u8).map(|b| cell(classify(operation, a, b))).collect();
        println!("    {} {}", a, row.join(" "));
    }
    println!();
}

fn print_question(label: &str, request: QuestionRequest) {
    let q = generate_question(request);
    println!("  {label:<22} {q} = {}", q.answer);
}

fn main() {
    // ── Technique classification ─────────────────────────────────────────────
    println!();
    println!("══ Digit-pair classification ══");
    println!();
    print_table(Operation::Addition);
    print_table(Operation::Subtraction);
    println!(
        "  Big friends of 7 under addition: {:?}",
        friends_of(7, Operation::Addition, Technique::BigFriend)
    );
    println!(
        "  Small friends of 6 under subtraction: {:?}",
        friends_of(6, Operation::Subtraction, Technique::SmallFriend)
    );
    println!();

    // ── Constrained questions ────────────────────────────────────────────────
    // Same seed = same question; each line exercises one requirement.
    println!("══ Constrained questions (seeded) ══");
    println!();
    print_question(
        "simple single:",
        QuestionRequest {
            rng_seed: Some(1001),
            ..QuestionRequest::new(DigitLevel::Single, Operation::Addition)
        },
    );
    print_question(
        "big friend single:",
        QuestionRequest {
            require_big_friend: true,
            rng_seed: Some(2002),
            ..QuestionRequest::new(DigitLevel::Single, Operation::Addition)
        },
    );
    print_question(
        "small friend double:",
        QuestionRequest {
            require_small_friend: true,
            rng_seed: Some(3003),
            ..QuestionRequest::new(DigitLevel::Double, Operation::Addition)
        },
    );
    print_question(
        "borrowing double:",
        QuestionRequest {
            require_small_friend: true,
            rng_seed: Some(4004),
            ..QuestionRequest::new(DigitLevel::Double, Operation::Subtraction)
        },
    );
    print_question(
        "mixed triple:",
        QuestionRequest {
            rng_seed: Some(5005),
            ..QuestionRequest::new(DigitLevel::Triple, Operation::Mixed)
        },
    );
    println!();

    // ── A mastery run ────────────────────────────────────────────────────────
    println!("══ Mastery run: first level to completion ══");
    println!();
    let store = MemoryStore::new();
    let settings = MasterySettings::default();
    let mut progress = initialize_progress();

    let level = current_level(&progress).expect("fresh progress has a current level");
    println!("  Active level: {} ({})", level, level.id);

    // One wrong answer along the way; it only counts the attempt.
    progress = record_incorrect_answer(&store, PROGRESS_KEY, progress)
        .expect("store accepts the update");
    for _ in 0..settings.correct_answers_to_complete {
        progress = record_correct_answer(&store, PROGRESS_KEY, progress, &settings)
            .expect("store accepts the update");
    }

    let next = current_level(&progress).expect("successor level is active");
    println!("  After {} correct answers:", settings.correct_answers_to_complete);
    println!("    completed:  {}", progress.all_levels[0].id);
    println!("    now active: {} ({})", next, next.id);
    println!("    total score: {}", progress.total_score);
    let section =
        section_progress(&progress, Operation::Addition, ComplementRequirement::Simple);
    println!(
        "    addition/simple section: {}/{} — curriculum {}%",
        section.completed,
        section.total,
        completion_percentage(&progress)
    );
    println!();

    // ── The bead codec ───────────────────────────────────────────────────────
    println!("══ Bead codec ══");
    println!();
    let board = BoardLayout::default();
    let value = 23;
    let keys = board.value_to_bead_keys(value).expect("non-negative value");
    println!("  {value} on a {}-column board:", board.columns);
    for key in &keys {
        println!("    {key}");
    }
    let back = board.bead_keys_to_value(&keys).expect("keys came from the codec");
    println!("  summed back: {back}");
    println!("  board capacity: {}", board.max_value());
}
