use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Arithmetic primitives
// ---------------------------------------------------------------------------

/// The operation a level (or question) exercises. `Mixed` is resolved to
/// `Addition` or `Subtraction` uniformly at random per generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Mixed,
}

impl Operation {
    /// Canonical curriculum order.
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Mixed,
    ];

    /// Stable id fragment used in level keys.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Addition    => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Mixed       => "mixed",
        }
    }

    /// Arithmetic sign for prompt rendering. Questions always carry a
    /// resolved operation, so `Mixed` only shows up when formatting a
    /// level, never a prompt.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition    => "+",
            Operation::Subtraction => "-",
            Operation::Mixed       => "±",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition    => write!(f, "Addition"),
            Operation::Subtraction => write!(f, "Subtraction"),
            Operation::Mixed       => write!(f, "Mixed"),
        }
    }
}

/// Which complement technique a single-digit pair requires on the board.
///
/// `Family` is a looser near-ten grouping produced by classification only;
/// no curriculum level requests it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technique {
    None,
    SmallFriend,
    BigFriend,
    Family,
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technique::None        => write!(f, "none"),
            Technique::SmallFriend => write!(f, "small friend"),
            Technique::BigFriend   => write!(f, "big friend"),
            Technique::Family      => write!(f, "family"),
        }
    }
}

/// Which techniques a curriculum level's questions must exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplementRequirement {
    Simple,
    SmallFriend,
    BigFriend,
    Both,
}

impl ComplementRequirement {
    /// Canonical curriculum order.
    pub const ALL: [ComplementRequirement; 4] = [
        ComplementRequirement::Simple,
        ComplementRequirement::SmallFriend,
        ComplementRequirement::BigFriend,
        ComplementRequirement::Both,
    ];

    /// Stable id fragment used in level keys.
    pub fn key(self) -> &'static str {
        match self {
            ComplementRequirement::Simple      => "simple",
            ComplementRequirement::SmallFriend => "small-friend",
            ComplementRequirement::BigFriend   => "big-friend",
            ComplementRequirement::Both        => "both",
        }
    }

    pub fn requires_small_friend(self) -> bool {
        matches!(
            self,
            ComplementRequirement::SmallFriend | ComplementRequirement::Both
        )
    }

    pub fn requires_big_friend(self) -> bool {
        matches!(
            self,
            ComplementRequirement::BigFriend | ComplementRequirement::Both
        )
    }
}

impl fmt::Display for ComplementRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplementRequirement::Simple      => write!(f, "Simple"),
            ComplementRequirement::SmallFriend => write!(f, "Small Friend"),
            ComplementRequirement::BigFriend   => write!(f, "Big Friend"),
            ComplementRequirement::Both        => write!(f, "Both Friends"),
        }
    }
}

/// Operand size of a level's questions, from one to five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitLevel {
    Single,
    Double,
    Triple,
    Four,
    Five,
}

impl DigitLevel {
    /// Canonical curriculum order.
    pub const ALL: [DigitLevel; 5] = [
        DigitLevel::Single,
        DigitLevel::Double,
        DigitLevel::Triple,
        DigitLevel::Four,
        DigitLevel::Five,
    ];

    /// Stable id fragment used in level keys.
    pub fn key(self) -> &'static str {
        match self {
            DigitLevel::Single => "single",
            DigitLevel::Double => "double",
            DigitLevel::Triple => "triple",
            DigitLevel::Four   => "four",
            DigitLevel::Five   => "five",
        }
    }
}

impl fmt::Display for DigitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DigitLevel::Single => "Single Digit",
            DigitLevel::Double => "Double Digit",
            DigitLevel::Triple => "Triple Digit",
            DigitLevel::Four   => "Four Digit",
            DigitLevel::Five   => "Five Digit",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Curriculum / learner state
// ---------------------------------------------------------------------------

/// One curriculum node. Identity is the (operation, complement, digits)
/// triple; `id` is derived from it and stable across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub operation: Operation,
    pub complement: ComplementRequirement,
    pub digit_level: DigitLevel,
    pub questions_completed: u32,
    pub correct_answers: u32,
    pub is_unlocked: bool,
    pub is_completed: bool,
}

impl Level {
    /// Creates a locked, untouched level for the given triple.
    pub fn new(
        operation: Operation,
        complement: ComplementRequirement,
        digit_level: DigitLevel,
    ) -> Self {
        Self {
            id: format!(
                "{}-{}-{}",
                operation.key(),
                complement.key(),
                digit_level.key()
            ),
            operation,
            complement,
            digit_level,
            questions_completed: 0,
            correct_answers: 0,
            is_unlocked: false,
            is_completed: false,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.operation, self.complement, self.digit_level
        )
    }
}

/// The whole learner state: every level plus the active one and the running
/// score. Level order is significant: "next level" is the next array slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    /// `None` means the curriculum is finished (or was never started).
    pub current_level_id: Option<String>,
    pub all_levels: Vec<Level>,
    pub total_score: u32,
}

impl UserProgress {
    /// Array position of a level id, if it exists.
    pub fn level_index(&self, level_id: &str) -> Option<usize> {
        self.all_levels.iter().position(|level| level.id == level_id)
    }
}

/// How many correct answers complete a level. A parameter rather than a
/// constant so alternate curricula can tighten or relax mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterySettings {
    pub correct_answers_to_complete: u32,
}

impl Default for MasterySettings {
    fn default() -> Self {
        Self {
            correct_answers_to_complete: 10,
        }
    }
}

/// Completed/total counts for one operation+complement section of the
/// curriculum, across all digit lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    pub completed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Question request / response types
// ---------------------------------------------------------------------------

/// Parameters for one generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub difficulty: DigitLevel,
    pub operation: Operation,
    pub require_small_friend: bool,
    pub require_big_friend: bool,
    /// `Some` makes generation fully deterministic; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Minimal constructor: no technique constraints, entropy seed.
    pub fn new(difficulty: DigitLevel, operation: Operation) -> Self {
        Self {
            difficulty,
            operation,
            require_small_friend: false,
            require_big_friend: false,
            rng_seed: None,
        }
    }

    /// The request a curriculum level asks the generator for: the level's
    /// difficulty and operation, with its complement requirement mapped
    /// onto the two technique flags.
    pub fn for_level(level: &Level) -> Self {
        Self {
            difficulty: level.digit_level,
            operation: level.operation,
            require_small_friend: level.complement.requires_small_friend(),
            require_big_friend: level.complement.requires_big_friend(),
            rng_seed: None,
        }
    }
}

/// One arithmetic question. `operation` is always resolved (`Addition` or
/// `Subtraction`), operand order matters for subtraction, and `answer` is
/// never negative because subtraction operands are ordered at generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub operands: [u32; 2],
    pub operation: Operation,
    pub answer: u32,
}

impl Question {
    /// Compares a proposed answer against the exact result.
    pub fn check(&self, candidate: u32) -> bool {
        candidate == self.answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operands[0],
            self.operation.symbol(),
            self.operands[1]
        )
    }
}
