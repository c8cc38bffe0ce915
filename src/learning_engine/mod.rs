//! Core learning engine: technique classification, question generation,
//! the curriculum graph, learner progression, and the bead-value codec.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: operations, techniques, levels, requests |
//! | `classifier` | Cached 10×10 digit-pair technique tables and derived queries |
//! | `numbers`    | Operand ranges and random drawing per digit level |
//! | `generator`  | Single entry point `generate_question()` with technique flags |
//! | `curriculum` | The fixed 60-level graph in canonical order |
//! | `progression`| Learner state: unlock chain, mastery threshold, scoring |
//! | `board`      | Board geometry and the value ↔ bead-key codec |
//! | `store`      | Persistence interface plus an in-memory reference store |
//! | `error`      | Error taxonomy and `Result` alias |

pub mod board;
pub mod classifier;
pub mod curriculum;
pub mod error;
pub mod generator;
pub mod models;
pub mod numbers;
pub mod progression;
pub mod store;

// Re-export the public API surface so callers can use
// `learning_engine::generate_question` without reaching into sub-modules.
pub use board::BoardLayout;
pub use classifier::{classify, first_digits_with, friends_of};
pub use curriculum::{build_all_levels, next_level_index};
pub use error::{Error, Result};
pub use generator::{generate_question, generate_question_with_rng};
pub use models::{
    ComplementRequirement, DigitLevel, Level, MasterySettings, Operation, Question,
    QuestionRequest, SectionProgress, Technique, UserProgress,
};
pub use progression::{
    completion_percentage, current_level, initialize_progress, load_progress,
    record_correct_answer, record_incorrect_answer, section_progress, select_level,
};
pub use store::{MemoryStore, ProgressStore, PROGRESS_KEY};
