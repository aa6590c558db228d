//! Command-line surface.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tendctl")]
#[command(about = "Tend - self-guided daily micro-practice tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's plan, streak and phase progress
    Today,

    /// Run one of today's lessons interactively
    Practice {
        /// 1-based pick number from `tendctl today`
        #[arg(default_value_t = 1)]
        pick: usize,
    },

    /// List all modules with per-lesson completion
    Modules,

    /// Show recent journal entries
    Journal {
        /// Most recent entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show or change settings
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },

    /// Erase all progress and start over
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_defaults_to_first_pick() {
        let cli = Cli::try_parse_from(["tendctl", "practice"]).unwrap();
        match cli.command {
            Commands::Practice { pick } => assert_eq!(pick, 1),
            _ => panic!("expected practice"),
        }
    }

    #[test]
    fn test_practice_takes_pick_number() {
        let cli = Cli::try_parse_from(["tendctl", "practice", "3"]).unwrap();
        match cli.command {
            Commands::Practice { pick } => assert_eq!(pick, 3),
            _ => panic!("expected practice"),
        }
    }

    #[test]
    fn test_journal_limit_flag() {
        let cli = Cli::try_parse_from(["tendctl", "journal", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::Journal { limit } => assert_eq!(limit, 5),
            _ => panic!("expected journal"),
        }
    }

    #[test]
    fn test_config_set_expression() {
        let cli =
            Cli::try_parse_from(["tendctl", "config", "--set", "intensity=standard"]).unwrap();
        match cli.command {
            Commands::Config { set } => assert_eq!(set.as_deref(), Some("intensity=standard")),
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_reset_requires_subcommand_flag_to_confirm() {
        let cli = Cli::try_parse_from(["tendctl", "reset"]).unwrap();
        match cli.command {
            Commands::Reset { yes } => assert!(!yes),
            _ => panic!("expected reset"),
        }
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["tendctl", "frobnicate"]).is_err());
    }
}
