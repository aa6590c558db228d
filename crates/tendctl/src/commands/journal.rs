//! Journal command: recent completed practice, newest first.

use crate::commands::open_store;
use crate::render::{header, kv, section};
use anyhow::Result;

pub fn journal(limit: usize) -> Result<()> {
    let store = open_store();
    let state = store.state();

    println!("{}", header("Journal"));
    if state.journal.is_empty() {
        println!("Empty so far. Finish one micro-lesson and it will show up here.");
        return Ok(());
    }

    for entry in state.journal.iter().rev().take(limit) {
        let module_title = store
            .catalog()
            .module(&entry.module_id)
            .map(|m| m.title)
            .unwrap_or(entry.module_id.as_str());
        println!();
        println!("{}", section(&entry.lesson_title));
        println!("{}", kv("Date", &entry.date.to_string()));
        println!("{}", kv("Module", module_title));
        for (key, value) in &entry.answers {
            println!("    {}: {}", key, value);
        }
    }

    Ok(())
}
