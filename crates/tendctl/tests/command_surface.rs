//! Command surface tests over a throwaway data directory.
//!
//! One test function on purpose: the data directory is selected via
//! the TEND_DATA_DIR environment variable, which is process-global.

use tend_core::config::DATA_DIR_ENV;
use tend_core::{FileStore, ProgressStore, StatePersistence};

#[test]
fn commands_share_one_persisted_state() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(DATA_DIR_ENV, dir.path());

    // Reporting commands work on a fresh (absent) state.
    tendctl::commands::today::today().unwrap();
    tendctl::commands::modules::modules().unwrap();
    tendctl::commands::journal::journal(5).unwrap();

    // Settings changes persist to the blob...
    tendctl::commands::config::config(Some("daily_minutes=8".to_string())).unwrap();
    tendctl::commands::config::config(Some("intensity=standard".to_string())).unwrap();

    let persisted = FileStore::new(dir.path()).load().expect("state was written");
    assert_eq!(persisted.settings.daily_minutes, 8);

    // ...and out-of-range minutes are clamped by the CLI.
    tendctl::commands::config::config(Some("daily_minutes=90".to_string())).unwrap();
    let persisted = FileStore::new(dir.path()).load().unwrap();
    assert_eq!(persisted.settings.daily_minutes, 15);

    // Bad keys and values are rejected.
    assert!(tendctl::commands::config::config(Some("volume=11".to_string())).is_err());
    assert!(tendctl::commands::config::config(Some("intensity=brutal".to_string())).is_err());

    // Practice with an out-of-range pick number fails without touching state.
    assert!(tendctl::commands::practice::practice(99).is_err());

    // Reset without confirmation keeps the state; with it, defaults return.
    tendctl::commands::reset::reset(false).unwrap();
    let persisted = FileStore::new(dir.path()).load().unwrap();
    assert_eq!(persisted.settings.intensity, tend_core::Intensity::Standard);

    tendctl::commands::reset::reset(true).unwrap();
    let store = ProgressStore::open(
        Box::new(FileStore::new(dir.path())),
        chrono::Local::now().date_naive(),
    );
    assert_eq!(store.state().settings.daily_minutes, 15);
    assert_eq!(store.state().xp, 0);

    std::env::remove_var(DATA_DIR_ENV);
}
