//! Learner-state operations: unlock chain, mastery, and scoring.
//!
//! A stateless service over explicit [`UserProgress`] values, with no
//! global learner state, so independent sessions can coexist. Every mutating
//! operation persists through the injected [`ProgressStore`] before
//! returning. Calls with no active level return the state unchanged; "no
//! active level" is a normal condition, not a failure.

use tracing::debug;

use crate::learning_engine::{
    curriculum::{build_all_levels, next_level_index},
    error::Result,
    models::{
        ComplementRequirement, Level, MasterySettings, Operation, SectionProgress, UserProgress,
    },
    store::ProgressStore,
};

/// Fresh learner state: the full curriculum with exactly the first level
/// unlocked and current, and a zero score.
pub fn initialize_progress() -> UserProgress {
    let mut all_levels = build_all_levels();
    all_levels[0].is_unlocked = true;
    let current_level_id = Some(all_levels[0].id.clone());
    UserProgress {
        current_level_id,
        all_levels,
        total_score: 0,
    }
}

/// Load saved state from the store, or initialize fresh state when the key
/// is absent.
pub fn load_progress(store: &dyn ProgressStore, key: &str) -> Result<UserProgress> {
    Ok(match store.load(key)? {
        Some(progress) => progress,
        None => initialize_progress(),
    })
}

/// Make an unlocked level the current one and persist. Unknown or locked
/// level ids leave the state unchanged.
pub fn select_level(
    store: &dyn ProgressStore,
    key: &str,
    progress: UserProgress,
    level_id: &str,
) -> Result<UserProgress> {
    let Some(index) = progress.level_index(level_id) else {
        return Ok(progress);
    };
    if !progress.all_levels[index].is_unlocked {
        return Ok(progress);
    }

    let mut progress = progress;
    progress.current_level_id = Some(progress.all_levels[index].id.clone());
    store.save(key, &progress)?;
    Ok(progress)
}

/// Record a correct answer on the current level and persist. At the
/// mastery threshold the level completes and the successor (by position)
/// unlocks and becomes current; past the last level the current level
/// clears to `None`.
pub fn record_correct_answer(
    store: &dyn ProgressStore,
    key: &str,
    progress: UserProgress,
    settings: &MasterySettings,
) -> Result<UserProgress> {
    let Some(index) = current_level_index(&progress) else {
        return Ok(progress);
    };

    let mut progress = progress;
    let level = &mut progress.all_levels[index];
    level.questions_completed += 1;
    level.correct_answers += 1;
    progress.total_score += 1;

    if progress.all_levels[index].correct_answers >= settings.correct_answers_to_complete {
        progress.all_levels[index].is_completed = true;
        debug!(level = %progress.all_levels[index].id, "level completed");
        match next_level_index(&progress.all_levels, index) {
            Some(next) => {
                progress.all_levels[next].is_unlocked = true;
                progress.current_level_id = Some(progress.all_levels[next].id.clone());
                debug!(level = %progress.all_levels[next].id, "level unlocked");
            }
            None => {
                progress.current_level_id = None;
                debug!("curriculum complete");
            }
        }
    }

    store.save(key, &progress)?;
    Ok(progress)
}

/// Record an incorrect answer on the current level and persist. Only the
/// attempt counter moves; mistakes never lock, regress, or complete
/// anything.
pub fn record_incorrect_answer(
    store: &dyn ProgressStore,
    key: &str,
    progress: UserProgress,
) -> Result<UserProgress> {
    let Some(index) = current_level_index(&progress) else {
        return Ok(progress);
    };

    let mut progress = progress;
    progress.all_levels[index].questions_completed += 1;
    store.save(key, &progress)?;
    Ok(progress)
}

/// Completed levels as a rounded whole-number percentage of the curriculum.
pub fn completion_percentage(progress: &UserProgress) -> u8 {
    let total = progress.all_levels.len();
    if total == 0 {
        return 0;
    }
    let completed = progress
        .all_levels
        .iter()
        .filter(|level| level.is_completed)
        .count();
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// Completed/total counts for one operation+complement section, across all
/// digit lengths.
pub fn section_progress(
    progress: &UserProgress,
    operation: Operation,
    complement: ComplementRequirement,
) -> SectionProgress {
    let mut completed = 0;
    let mut total = 0;
    for level in &progress.all_levels {
        if level.operation == operation && level.complement == complement {
            total += 1;
            if level.is_completed {
                completed += 1;
            }
        }
    }
    SectionProgress { completed, total }
}

/// The active level, if any.
pub fn current_level(progress: &UserProgress) -> Option<&Level> {
    current_level_index(progress).map(|index| &progress.all_levels[index])
}

fn current_level_index(progress: &UserProgress) -> Option<usize> {
    let id = progress.current_level_id.as_deref()?;
    progress.level_index(id)
}
