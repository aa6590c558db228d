//! Progression engine for tend, a self-guided therapeutic
//! micro-practice tracker.
//!
//! The engine sequences a fixed curriculum: it picks today's lessons,
//! steps a lesson session through teach/practice/reflect, and folds
//! completions into streak, XP, level and phase progression. It never
//! interprets the psychological meaning of answers.
//!
//! Single-threaded and synchronous by design: one owner
//! ([`store::ProgressStore`]) applies pure transitions and persists a
//! single JSON blob after each one, best-effort.

pub mod catalog;
pub mod config;
pub mod persistence;
pub mod phase;
pub mod selector;
pub mod session;
pub mod state;
pub mod store;
pub mod streak;

pub use catalog::{Catalog, Lesson, Module, PracticeStep, PHASES, REGULATION, XP_PER_LESSON};
pub use persistence::{FileStore, MemoryStore, StatePersistence, StoreError};
pub use phase::{credit_practice_day, phase_module_id, PhaseCredit};
pub use selector::{pick_daily_lessons, DailyPick};
pub use session::{CompletionEvent, LessonSession, SessionStep};
pub use state::{level_from_xp, AppState, Intensity, JournalEntry, Settings};
pub use store::{CompletionOutcome, ProgressStore};
pub use streak::{evaluate_streak, StreakStatus};
