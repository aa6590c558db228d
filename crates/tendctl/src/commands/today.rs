//! Today command: the daily plan at a glance.

use crate::commands::{local_today, open_store};
use crate::render::{chip, gauge, header, kv, section};
use anyhow::Result;
use tend_core::PHASES;

pub fn today() -> Result<()> {
    let store = open_store();
    let state = store.state();

    println!("{}", header("Tend - daily practice"));
    println!(
        "{} {} {}",
        chip(&format!("Level {}", state.level)),
        chip(&format!("XP {}", state.xp)),
        chip(&format!("Streak {}", state.streak)),
    );
    println!("{}", kv("Date", &local_today().to_string()));

    let phase = store.catalog().phase_module(state.current_phase_index);
    println!();
    println!("{}", section("Phase"));
    println!("{}", kv("Focus", phase.title));
    println!(
        "{}",
        kv(
            "Days",
            &gauge(state.phase_done_days, state.phase_target_days)
        )
    );
    if state.current_phase_index == PHASES.len() - 1 {
        println!("{}", kv("Note", "final phase - keep practicing"));
    }

    println!();
    println!("{}", section("Today's plan"));
    for (i, pick) in store.daily_picks().iter().enumerate() {
        let marker = if state.is_lesson_done(pick.lesson.id) {
            "done"
        } else {
            "up next"
        };
        println!(
            "  {}. {} - {} {}",
            i + 1,
            pick.module.title,
            pick.lesson.title,
            chip(marker)
        );
    }
    println!();
    println!(
        "{}",
        kv("Run", "tendctl practice <number> to start a lesson")
    );

    Ok(())
}
