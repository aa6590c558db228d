//! Per-lesson session state machine.
//!
//! One session per lesson attempt: teach, then practice steps, then a
//! single reflection. Advancement is gated on the answers collected
//! so far; nothing touches `AppState` until the session finishes and
//! its completion event is handed to the store.

use crate::catalog::{Lesson, Module, PracticeStep};
use crate::state::Intensity;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Answer-map key for the reflection prompt.
pub const REFLECT_KEY: &str = "reflect";

/// One step of a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Teach,
    /// Index into the lesson's practice steps.
    Practice(usize),
    Reflect,
}

/// Emitted once when a session completes with a valid reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
    pub module_id: String,
    pub lesson_id: String,
    pub lesson_title: String,
    pub date: NaiveDate,
    pub answers: BTreeMap<String, String>,
}

/// A lesson attempt in progress.
#[derive(Debug)]
pub struct LessonSession<'a> {
    module: &'a Module,
    lesson: &'a Lesson,
    steps: Vec<SessionStep>,
    position: usize,
    answers: BTreeMap<String, String>,
}

impl<'a> LessonSession<'a> {
    /// Build the step sequence for one attempt.
    ///
    /// Gentle intensity keeps only the first practice step; the rest
    /// are not surfaced for this attempt at all.
    pub fn new(module: &'a Module, lesson: &'a Lesson, intensity: Intensity) -> Self {
        let mut steps = vec![SessionStep::Teach];
        match intensity {
            Intensity::Gentle => {
                if !lesson.practice.is_empty() {
                    steps.push(SessionStep::Practice(0));
                }
            }
            Intensity::Standard => {
                for idx in 0..lesson.practice.len() {
                    steps.push(SessionStep::Practice(idx));
                }
            }
        }
        steps.push(SessionStep::Reflect);

        Self {
            module,
            lesson,
            steps,
            position: 0,
            answers: BTreeMap::new(),
        }
    }

    pub fn module(&self) -> &'a Module {
        self.module
    }

    pub fn lesson(&self) -> &'a Lesson {
        self.lesson
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> SessionStep {
        self.steps[self.position]
    }

    /// Practice step behind the current session step, if any.
    pub fn current_practice(&self) -> Option<(usize, &'a PracticeStep)> {
        match self.current() {
            SessionStep::Practice(idx) => Some((idx, &self.lesson.practice[idx])),
            _ => None,
        }
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    /// Record a raw answer. Typed helpers below are preferred.
    pub fn set_answer(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(key.into(), value.into());
    }

    /// Select an option for a pick-type practice step.
    pub fn select_option(&mut self, step_index: usize, option: &str) {
        self.set_answer(format!("pick_{}", step_index), option);
    }

    /// Store free text for a text-type practice step.
    pub fn set_text(&mut self, step_index: usize, text: &str) {
        self.set_answer(format!("text_{}", step_index), text);
    }

    pub fn set_reflection(&mut self, text: &str) {
        self.set_answer(REFLECT_KEY, text);
    }

    fn answer_satisfied(&self, key: &str) -> bool {
        self.answers
            .get(key)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }

    /// Whether the current step is satisfied by the collected answers.
    pub fn can_advance(&self) -> bool {
        match self.current() {
            SessionStep::Teach => true,
            SessionStep::Practice(idx) => match &self.lesson.practice[idx] {
                PracticeStep::Pick { .. } => self.answer_satisfied(&format!("pick_{}", idx)),
                PracticeStep::Text { .. } => self.answer_satisfied(&format!("text_{}", idx)),
                PracticeStep::Breath { .. } | PracticeStep::Body { .. } => true,
            },
            SessionStep::Reflect => self.answer_satisfied(REFLECT_KEY),
        }
    }

    /// Move to the next step. Refused (returns false) when the current
    /// step is unsatisfied or the session is already at the reflection.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() || self.position + 1 >= self.steps.len() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Complete the session. Only valid on the reflection step with a
    /// non-empty answer; returns the completion event exactly once.
    pub fn finish(self, today: NaiveDate) -> Option<CompletionEvent> {
        if self.current() != SessionStep::Reflect || !self.can_advance() {
            return None;
        }
        Some(CompletionEvent {
            module_id: self.module.id.to_string(),
            lesson_id: self.lesson.id.to_string(),
            lesson_title: self.lesson.title.to_string(),
            date: today,
            answers: self.answers,
        })
    }
}
