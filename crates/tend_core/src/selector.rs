//! Daily lesson selection.
//!
//! Pure query: same inputs, same picks. The selector never mutates
//! state and never touches the clock.

use crate::catalog::{Catalog, Lesson, Module, REGULATION};
use std::collections::BTreeMap;

/// One offered lesson, paired with its owning module.
#[derive(Debug, Clone, Copy)]
pub struct DailyPick<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
}

/// Number of lessons offered for a daily minute budget.
pub fn target_count(daily_minutes: u32) -> usize {
    if daily_minutes <= 10 {
        3
    } else {
        4
    }
}

/// Build today's ordered pick list.
///
/// The current phase module fills up to `target - 1` slots with its
/// not-yet-done lessons (falling back to the full lesson list once the
/// module is exhausted, so the plan never runs dry). Unless the phase
/// module already is regulation, one regulation lesson is appended as
/// a grounding anchor; the reserved slot guarantees the final
/// truncation never drops it. A lesson never appears twice in one
/// plan, so the regulation-phase list may be shorter than the target.
pub fn pick_daily_lessons<'a>(
    catalog: &'a Catalog,
    current_phase_index: usize,
    lesson_done: &BTreeMap<String, bool>,
    daily_minutes: u32,
) -> Vec<DailyPick<'a>> {
    let target = target_count(daily_minutes);
    let current = catalog.phase_module(current_phase_index);
    let done = |lesson: &Lesson| lesson_done.get(lesson.id).copied().unwrap_or(false);

    let mut picks: Vec<DailyPick<'a>> = Vec::with_capacity(target);

    let undone: Vec<&Lesson> = current.lessons.iter().filter(|l| !done(l)).collect();
    let pool: Vec<&Lesson> = if undone.is_empty() {
        current.lessons.iter().collect()
    } else {
        undone
    };

    for lesson in pool {
        if picks.len() >= target - 1 {
            break;
        }
        picks.push(DailyPick {
            module: current,
            lesson,
        });
    }

    if current.id != REGULATION {
        let regulation = catalog.phase_module(0);
        let anchor = regulation
            .lessons
            .iter()
            .find(|l| !done(l))
            .unwrap_or(&regulation.lessons[0]);
        picks.push(DailyPick {
            module: regulation,
            lesson: anchor,
        });
    } else {
        // No anchor needed; further distinct regulation lessons may
        // fill the reserved slot. Never the same lesson twice in one
        // plan, so the list can come up short of the target.
        let taken: Vec<&str> = picks.iter().map(|p| p.lesson.id).collect();
        for lesson in current.lessons.iter() {
            if picks.len() >= target {
                break;
            }
            if !taken.contains(&lesson.id) && !done(lesson) {
                picks.push(DailyPick {
                    module: current,
                    lesson,
                });
            }
        }
    }

    picks.truncate(target);
    picks
}
