//! Progression store: sole owner and sole writer of [`AppState`].
//!
//! Every user-visible action is a named command that applies the pure
//! transition functions and then asks the persistence port to replace
//! the blob. Write failures are logged and swallowed; the in-memory
//! state stays authoritative for the running session.

use crate::catalog::{Catalog, XP_PER_LESSON};
use crate::persistence::StatePersistence;
use crate::phase::credit_practice_day;
use crate::selector::{pick_daily_lessons, DailyPick};
use crate::session::{CompletionEvent, LessonSession};
use crate::state::{level_from_xp, AppState, Intensity, JournalEntry};
use crate::streak::evaluate_streak;
use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

/// Summary of what one completion changed, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// XP awarded by this completion (0 on re-completion).
    pub xp_awarded: u32,
    pub level: u32,
    pub streak: u32,
    /// Phase index after the daily credit ran.
    pub phase_index: usize,
}

pub struct ProgressStore {
    catalog: Catalog,
    state: AppState,
    persistence: Box<dyn StatePersistence>,
}

impl ProgressStore {
    /// Load the persisted state or start from defaults. Corrupt or
    /// absent blobs recover silently.
    pub fn open(persistence: Box<dyn StatePersistence>, today: NaiveDate) -> Self {
        let catalog = Catalog::builtin();
        let state = match persistence.load() {
            Some(state) => state,
            None => {
                debug!("no usable persisted state, starting fresh");
                AppState::new(&catalog, today)
            }
        };
        Self {
            catalog,
            state,
            persistence,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Today's ordered lesson plan.
    pub fn daily_picks(&self) -> Vec<DailyPick<'_>> {
        pick_daily_lessons(
            &self.catalog,
            self.state.current_phase_index,
            &self.state.lesson_done,
            self.state.settings.daily_minutes,
        )
    }

    /// Start a session for a pick, honoring the configured intensity.
    pub fn start_session<'a>(&'a self, pick: &DailyPick<'a>) -> LessonSession<'a> {
        LessonSession::new(pick.module, pick.lesson, self.state.settings.intensity)
    }

    /// Apply a completion event as one atomic transition.
    ///
    /// Re-completing an already-done lesson updates the journal but
    /// never re-awards XP; streak and phase credit still run so the
    /// day counts. Events that do not resolve against the catalog are
    /// ignored: `lesson_done` keys stay a subset of catalog lesson
    /// ids and `module_xp` never gains unknown modules.
    pub fn complete_lesson(&mut self, event: CompletionEvent, today: NaiveDate) -> CompletionOutcome {
        let unchanged = CompletionOutcome {
            xp_awarded: 0,
            level: self.state.level,
            streak: self.state.streak,
            phase_index: self.state.current_phase_index,
        };
        match self.catalog.lesson(&event.lesson_id) {
            Some((module, _)) if module.id == event.module_id => {}
            Some(_) => {
                warn!(
                    lesson_id = %event.lesson_id,
                    module_id = %event.module_id,
                    "ignoring completion: lesson does not belong to that module"
                );
                return unchanged;
            }
            None => {
                warn!(lesson_id = %event.lesson_id, "ignoring completion for unknown lesson");
                return unchanged;
            }
        }

        let first_completion = !self.state.is_lesson_done(&event.lesson_id);

        self.state.lesson_done.insert(event.lesson_id.clone(), true);

        let xp_awarded = if first_completion { XP_PER_LESSON } else { 0 };
        if first_completion {
            self.state.xp += XP_PER_LESSON;
            *self
                .state
                .module_xp
                .entry(event.module_id.clone())
                .or_insert(0) += XP_PER_LESSON;
        }
        self.state.level = level_from_xp(self.state.xp);

        let (streak, status) =
            evaluate_streak(self.state.last_done_date, self.state.streak, today);
        self.state.streak = streak;
        self.state.last_done_date = Some(today);
        debug!(?status, streak, "streak evaluated");

        credit_practice_day(&mut self.state, today);

        self.state.journal.push(JournalEntry {
            ts: Utc::now(),
            date: event.date,
            module_id: event.module_id,
            lesson_id: event.lesson_id,
            lesson_title: event.lesson_title,
            answers: event.answers,
        });

        self.persist();

        CompletionOutcome {
            xp_awarded,
            level: self.state.level,
            streak: self.state.streak,
            phase_index: self.state.current_phase_index,
        }
    }

    /// Accepted verbatim; the presentation layer clamps the range.
    pub fn set_daily_minutes(&mut self, minutes: u32) {
        self.state.settings.daily_minutes = minutes;
        self.persist();
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.state.settings.intensity = intensity;
        self.persist();
    }

    /// Discard all progress and recreate defaults. The only
    /// destruction path.
    pub fn reset(&mut self, today: NaiveDate) {
        self.state = AppState::new(&self.catalog, today);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.store(&self.state) {
            warn!("failed to persist state: {}", e);
        }
    }
}
