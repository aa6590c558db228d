//! Practice command: run one lesson session interactively.

use crate::commands::{local_today, open_store};
use crate::render::{header, kv, section, status, Level};
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use tend_core::{LessonSession, PracticeStep, SessionStep, XP_PER_LESSON};

pub fn practice(pick_number: usize) -> Result<()> {
    let mut store = open_store();
    let today = local_today();

    let picks = store.daily_picks();
    if pick_number == 0 || pick_number > picks.len() {
        bail!(
            "pick {} is out of range; today's plan has {} lessons (see `tendctl today`)",
            pick_number,
            picks.len()
        );
    }
    let pick = picks[pick_number - 1];
    let already_done = store.state().is_lesson_done(pick.lesson.id);

    let mut session = store.start_session(&pick);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&mut session, &mut input)?;

    let event = session
        .finish(today)
        .context("session ended before the reflection was answered")?;
    let outcome = store.complete_lesson(event, today);

    println!();
    if already_done {
        println!(
            "{}",
            status(Level::Success, "Lesson repeated and journaled (no new XP).")
        );
    } else {
        println!(
            "{}",
            status(
                Level::Success,
                &format!("Lesson complete: +{} XP", XP_PER_LESSON)
            )
        );
    }
    println!("{}", kv("Level", &outcome.level.to_string()));
    println!("{}", kv("Streak", &outcome.streak.to_string()));
    println!(
        "{}",
        kv(
            "Phase",
            store.catalog().phase_module(outcome.phase_index).title
        )
    );

    Ok(())
}

/// Drive the session over line-based input. Split from `practice` so
/// tests can feed scripted answers.
fn run_session(session: &mut LessonSession<'_>, input: &mut impl BufRead) -> Result<()> {
    println!("{}", header(session.lesson().title));
    println!("{}", kv("Module", session.module().title));

    loop {
        match session.current() {
            SessionStep::Teach => {
                println!();
                println!("{}", session.lesson().teach);
                prompt_ack(input, "Press Enter to begin the practice.")?;
                session.advance();
            }
            SessionStep::Practice(idx) => {
                let step = &session.lesson().practice[idx];
                println!();
                println!("{}", section(step.instruction()));
                match step {
                    PracticeStep::Breath { .. } | PracticeStep::Body { .. } => {
                        prompt_ack(input, "Press Enter when done.")?;
                    }
                    PracticeStep::Pick { options, .. } => {
                        let choice = prompt_pick(input, options)?;
                        session.select_option(idx, choice);
                    }
                    PracticeStep::Text { .. } => {
                        let text = prompt_text(input, "Your answer: ")?;
                        session.set_text(idx, &text);
                    }
                }
                session.advance();
            }
            SessionStep::Reflect => {
                println!();
                println!("{}", section(session.lesson().reflect));
                let text = prompt_text(input, "Reflection: ")?;
                session.set_reflection(&text);
                return Ok(());
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        bail!("input ended before the session finished");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_ack(input: &mut impl BufRead, message: &str) -> Result<()> {
    print!("{} ", message);
    io::stdout().flush()?;
    read_line(input)?;
    Ok(())
}

fn prompt_text(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let line = read_line(input)?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
        println!("{}", status(Level::Warning, "An answer is needed to continue."));
    }
}

fn prompt_pick<'o>(input: &mut impl BufRead, options: &'o [&'o str]) -> Result<&'o str> {
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        print!("Choose 1-{}: ", options.len());
        io::stdout().flush()?;
        let line = read_line(input)?;
        if let Ok(n) = line.trim().parse::<usize>() {
            if n >= 1 && n <= options.len() {
                return Ok(options[n - 1]);
            }
        }
        println!("{}", status(Level::Warning, "Not a valid option number."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tend_core::{Catalog, Intensity};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn test_scripted_session_with_pick_and_text() {
        let catalog = Catalog::builtin();
        // deprivation-1 practice: [pick, text]
        let (module, lesson) = catalog.lesson("deprivation-1").unwrap();
        let mut session = LessonSession::new(module, lesson, Intensity::Standard);

        // teach ack, option 2, free text, reflection
        let script = "\n2\nToday I need rest.\n6\n";
        run_session(&mut session, &mut Cursor::new(script)).unwrap();

        let event = session.finish(date()).unwrap();
        assert_eq!(event.answers["pick_0"], "closeness");
        assert_eq!(event.answers["text_1"], "Today I need rest.");
        assert_eq!(event.answers["reflect"], "6");
    }

    #[test]
    fn test_invalid_pick_numbers_are_reprompted() {
        let catalog = Catalog::builtin();
        let (module, lesson) = catalog.lesson("deprivation-1").unwrap();
        let mut session = LessonSession::new(module, lesson, Intensity::Gentle);

        // teach ack, junk, out-of-range, valid option, reflection
        let script = "\nhm\n99\n1\nfine\n";
        run_session(&mut session, &mut Cursor::new(script)).unwrap();
        let event = session.finish(date()).unwrap();
        assert_eq!(event.answers["pick_0"], "calm");
    }

    #[test]
    fn test_blank_text_is_reprompted() {
        let catalog = Catalog::builtin();
        // anger-2 practice: [text, text]
        let (module, lesson) = catalog.lesson("anger-2").unwrap();
        let mut session = LessonSession::new(module, lesson, Intensity::Gentle);

        let script = "\n   \nWhen plans change last minute, I need a pause.\n7\n";
        run_session(&mut session, &mut Cursor::new(script)).unwrap();
        let event = session.finish(date()).unwrap();
        assert_eq!(
            event.answers["text_0"],
            "When plans change last minute, I need a pause."
        );
    }

    #[test]
    fn test_truncated_input_fails_cleanly() {
        let catalog = Catalog::builtin();
        let (module, lesson) = catalog.lesson("regulation-1").unwrap();
        let mut session = LessonSession::new(module, lesson, Intensity::Gentle);

        let script = "\n"; // ack the teach step, then EOF
        let err = run_session(&mut session, &mut Cursor::new(script)).unwrap_err();
        assert!(err.to_string().contains("input ended"));
        assert!(session.finish(date()).is_none());
    }
}
