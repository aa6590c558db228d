//! Reset command: discard all progress.

use crate::commands::{local_today, open_store};
use crate::render::{status, Level};
use anyhow::Result;

pub fn reset(yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{}",
            status(
                Level::Warning,
                "This erases all progress, XP and journal entries. \
                 Run `tendctl reset --yes` to confirm."
            )
        );
        return Ok(());
    }

    let mut store = open_store();
    store.reset(local_today());
    println!("{}", status(Level::Success, "Progress reset. Fresh start."));
    Ok(())
}
