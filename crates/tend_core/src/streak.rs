//! Streak continuation rules.

use chrono::NaiveDate;

/// Outcome of a streak evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStatus {
    /// No practice recorded yet.
    None,
    /// Already counted today, no change.
    Today,
    /// Practiced yesterday, streak grows.
    Continued,
    /// Gap of two or more days (or clock skew), streak restarts.
    Reset,
}

/// Evaluate the streak for `today` against the last completed day.
///
/// Pure: returns the new streak value and what happened, the caller
/// decides whether to commit it.
pub fn evaluate_streak(
    last_done: Option<NaiveDate>,
    current_streak: u32,
    today: NaiveDate,
) -> (u32, StreakStatus) {
    let Some(last) = last_done else {
        return (0, StreakStatus::None);
    };
    match (today - last).num_days() {
        0 => (current_streak, StreakStatus::Today),
        1 => (current_streak + 1, StreakStatus::Continued),
        _ => (0, StreakStatus::Reset),
    }
}
