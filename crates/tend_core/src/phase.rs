//! Phase progression: one credit per calendar day, advance after the
//! configured number of credited days.

use crate::catalog::PHASES;
use crate::state::AppState;
use chrono::NaiveDate;
use tracing::debug;

/// What a day-credit transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseCredit {
    /// This date was already credited.
    AlreadyCounted,
    /// One more day credited to the current phase.
    Counted,
    /// The credit reached the target and the phase advanced.
    Advanced,
}

/// Module id for a phase index, clamped to the last phase for
/// out-of-range input instead of failing.
pub fn phase_module_id(phase_index: usize) -> &'static str {
    PHASES
        .get(phase_index)
        .copied()
        .unwrap_or(PHASES[PHASES.len() - 1])
}

/// Credit `today` toward the current phase. Invoked once per calendar
/// day on which at least one lesson was completed.
///
/// The last phase is terminal: it keeps collecting credits up to the
/// target but never advances past the end of [`PHASES`].
pub fn credit_practice_day(state: &mut AppState, today: NaiveDate) -> PhaseCredit {
    if state.phase_last_counted_date == Some(today) {
        return PhaseCredit::AlreadyCounted;
    }

    state.phase_done_days += 1;
    state.phase_last_counted_date = Some(today);

    if state.phase_done_days >= state.phase_target_days {
        let last = PHASES.len() - 1;
        if state.current_phase_index < last {
            state.current_phase_index += 1;
        }
        state.phase_done_days = 0;
        debug!(
            phase_index = state.current_phase_index,
            "phase credit reached target"
        );
        return PhaseCredit::Advanced;
    }

    PhaseCredit::Counted
}
