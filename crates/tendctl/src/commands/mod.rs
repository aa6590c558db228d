//! Subcommand implementations.

pub mod config;
pub mod journal;
pub mod modules;
pub mod practice;
pub mod reset;
pub mod today;

use chrono::{Local, NaiveDate};
use tend_core::config::{data_dir, TendConfig};
use tend_core::{FileStore, ProgressStore};

/// Open the progression store over the resolved data directory.
pub(crate) fn open_store() -> ProgressStore {
    let config = TendConfig::load();
    let store = FileStore::new(data_dir(&config));
    ProgressStore::open(Box::new(store), local_today())
}

/// Today's calendar date in the local timezone.
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
