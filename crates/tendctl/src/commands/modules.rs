//! Modules command: the whole curriculum with completion state.

use crate::commands::open_store;
use crate::render::{chip, header, kv, section};
use anyhow::Result;

pub fn modules() -> Result<()> {
    let store = open_store();
    let state = store.state();

    println!("{}", header("Modules"));
    for module in store.catalog().modules() {
        let xp = state.module_xp.get(module.id).copied().unwrap_or(0);
        println!();
        println!(
            "{} {}",
            section(module.title),
            chip(&format!("XP {}", xp))
        );
        println!("{}", kv("Why", module.rationale));
        for lesson in &module.lessons {
            let marker = if state.is_lesson_done(lesson.id) {
                "done"
            } else {
                "not started"
            };
            println!("  - {} {}", lesson.title, chip(marker));
        }
    }

    Ok(())
}
