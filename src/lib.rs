//! # sempoa_trainer
//!
//! The learning-progression core of a sempoa (abacus) teaching tool.
//!
//! This library owns everything behind the bead board: a fixed 60-level
//! curriculum (operation × complement technique × digit length), the
//! learner state that unlocks those levels one by one, a constrained
//! random question generator, the digit-pair classifier that decides
//! which complement technique ("small friend" / "big friend") a pair
//! needs, and the codec between numbers and active bead positions.
//! Rendering, input, and the storage medium stay outside; the engine
//! only consumes a load/save key-value interface.
//!
//! ## How it works
//!
//! 1. [`initialize_progress`] (or [`load_progress`]) builds the learner
//!    state: all 60 levels in canonical order, only the first unlocked.
//! 2. [`QuestionRequest::for_level`] + [`generate_question`] produce a
//!    practice question for the active level, redrawing operands until
//!    the level's technique flags are satisfied (bounded, best effort).
//! 3. The learner answers on the board; [`BoardLayout`] converts between
//!    the shown value and `"{column}-{upper|lower}-{row}"` bead keys.
//! 4. [`record_correct_answer`] / [`record_incorrect_answer`] update the
//!    state; ten correct answers complete a level, unlock its successor,
//!    and advance, until the last level clears the current pointer.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same question every time — useful for tests and worked examples.
//! - **Stateless service**: progression operations are pure functions
//!   taking and returning [`UserProgress`], with the persistence store
//!   passed in — multiple independent learners need no coordination.
//! - **Forgiving by contract**: no active level means every recording
//!   call is a silent no-op; unsatisfiable generation constraints degrade
//!   to best effort instead of erroring or looping.
//!
//! ## Quick start
//!
//! ```rust
//! use sempoa_trainer::{generate_question, DigitLevel, Operation, QuestionRequest};
//!
//! // Minimal — difficulty and operation only (no flags, entropy seed):
//! let q = generate_question(QuestionRequest::new(DigitLevel::Single, Operation::Addition));
//! println!("Q: {q} = ?");
//!
//! // Full control — force the big-friend technique, fix the seed:
//! let q = generate_question(QuestionRequest {
//!     difficulty: DigitLevel::Double,
//!     operation: Operation::Mixed,
//!     require_small_friend: false,
//!     require_big_friend: true,
//!     rng_seed: Some(42),
//! });
//! assert!(q.check(q.answer));
//! ```
//!
//! Driving the curriculum:
//!
//! ```rust
//! use sempoa_trainer::{
//!     initialize_progress, record_correct_answer, MasterySettings, MemoryStore, PROGRESS_KEY,
//! };
//!
//! let store = MemoryStore::new();
//! let settings = MasterySettings::default();
//! let mut progress = initialize_progress();
//! for _ in 0..settings.correct_answers_to_complete {
//!     progress = record_correct_answer(&store, PROGRESS_KEY, progress, &settings).unwrap();
//! }
//! assert!(progress.all_levels[0].is_completed);
//! assert!(progress.all_levels[1].is_unlocked);
//! ```

pub mod learning_engine;

// Convenience re-exports so callers can use `sempoa_trainer::generate_question`
// directly without reaching into `learning_engine::`.
pub use learning_engine::{
    build_all_levels, classify, completion_percentage, current_level, first_digits_with,
    friends_of, generate_question, generate_question_with_rng, initialize_progress,
    load_progress, next_level_index, record_correct_answer, record_incorrect_answer,
    section_progress, select_level, BoardLayout, ComplementRequirement, DigitLevel, Error,
    Level, MasterySettings, MemoryStore, Operation, ProgressStore, Question, QuestionRequest,
    Result, SectionProgress, Technique, UserProgress, PROGRESS_KEY,
};
