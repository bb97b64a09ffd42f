//! CLI command definitions using clap

use crate::models::TaskStatus;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Three-column kanban board in your terminal
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the global board (~/.taskboard) instead of the project board
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Use the board stored in this directory
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .taskboard directory here
    Init,

    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(short, long)]
        description: Option<String>,

        /// Column to add to (todo, in-progress, done)
        #[arg(short, long, value_parser = parse_status, default_value = "todo")]
        status: TaskStatus,
    },

    /// Show the board
    Board {
        /// Only show tasks matching this text
        #[arg(short, long)]
        search: Option<String>,

        /// Also show recent activity
        #[arg(long)]
        history: bool,
    },

    /// List tasks
    List {
        /// Only list one column
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,

        /// Only list tasks matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show task details
    Show {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Edit a task's title or description
    Edit {
        /// Task ID (or unique prefix)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (empty to clear)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Move a task to the end of another column
    Move {
        /// Task ID (or unique prefix)
        id: String,

        /// Destination column (todo, in-progress, done)
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },

    /// Drag a task and drop it onto a column or another task
    Drop {
        /// Task ID (or unique prefix) being dragged
        id: String,

        /// Column id, or ID of the task to drop onto
        target: String,
    },

    /// Set the order of a column
    Reorder {
        /// Column (todo, in-progress, done)
        #[arg(value_parser = parse_status)]
        status: TaskStatus,

        /// Task IDs (or unique prefixes) in the desired order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID (or unique prefix)
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show recent activity
    History,

    /// Show task statistics
    Stats {
        /// Only count tasks matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Delete every task and all history
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_defaults_to_todo() {
        let cli = Cli::try_parse_from(["taskboard", "add", "Buy milk"]).unwrap();
        match cli.command {
            Commands::Add {
                title,
                description,
                status,
            } => {
                assert_eq!(title, "Buy milk");
                assert!(description.is_none());
                assert_eq!(status, TaskStatus::Todo);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["taskboard", "board", "--dir", "/tmp/b", "-s", "milk"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/b")));
        assert!(matches!(
            cli.command,
            Commands::Board { search: Some(ref q), history: false } if q == "milk"
        ));
    }

    #[test]
    fn test_parse_status_aliases() {
        let cli = Cli::try_parse_from(["taskboard", "move", "abc", "doing"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Move { status: TaskStatus::InProgress, .. }
        ));
        assert!(Cli::try_parse_from(["taskboard", "move", "abc", "archived"]).is_err());
    }

    #[test]
    fn test_reorder_requires_ids() {
        assert!(Cli::try_parse_from(["taskboard", "reorder", "todo"]).is_err());
    }
}
