//! Display formatting for CLI output

use crate::board::{BoardStats, BoardView};
use crate::models::{HistoryEntry, Task};
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            id: task.id.clone(),
            title: truncate(&task.title, 40),
            status: task.status.to_string(),
            updated: task.updated_at.format("%b %d %H:%M").to_string(),
        }
    }
}

/// Display a list of tasks as a table
pub fn display_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        log::info!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("{}", table);
}

/// Display the board as side-by-side columns
pub fn display_board(view: &BoardView) {
    let mut builder = Builder::default();
    builder.push_record(
        view.columns
            .iter()
            .map(|c| format!("{} ({})", c.title, c.len())),
    );

    let depth = view.columns.iter().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..depth {
        builder.push_record(view.columns.iter().map(|c| {
            c.tasks
                .get(row)
                .map(|t| format!("{} {}", t.id, truncate(&t.title, 28)))
                .unwrap_or_default()
        }));
    }

    let table = builder.build().with(Style::rounded()).to_string();
    println!("{}", table);

    let scope = if view.is_filtered { " (filtered)" } else { "" };
    println!(
        "{} of {} tasks done, {}%{}",
        view.completed, view.total, view.progress_percentage, scope
    );
}

/// Display detailed task information
pub fn display_task_detail(task: &Task) {
    println!("ID:       {}", task.id);
    println!("Title:    {}", task.title);
    println!("Status:   {}", task.status.title());
    println!("Created:  {}", task.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated:  {}", task.updated_at.format("%Y-%m-%d %H:%M:%S"));

    if let Some(description) = &task.description {
        println!();
        println!("Description:");
        println!("{}", description);
    }
}

/// History row for table display
#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Task")]
    task: String,
}

/// Display recent activity, newest first
pub fn display_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        log::info!("No recent activity.");
        return;
    }

    let rows: Vec<HistoryRow> = entries
        .iter()
        .map(|e| HistoryRow {
            when: e.timestamp.format("%b %d %H:%M").to_string(),
            action: e.action.to_string(),
            task: e.summary(),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("{}", table);
}

/// Stats row for table display
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Count")]
    count: String,
}

/// Display task statistics
pub fn display_stats(stats: &BoardStats, view: &BoardView) {
    let mut rows = vec![
        StatsRow {
            metric: "Total".to_string(),
            count: stats.total.to_string(),
        },
        StatsRow {
            metric: "To Do".to_string(),
            count: stats.todo.to_string(),
        },
        StatsRow {
            metric: "In Progress".to_string(),
            count: stats.in_progress.to_string(),
        },
        StatsRow {
            metric: "Done".to_string(),
            count: stats.done.to_string(),
        },
    ];

    if view.is_filtered {
        rows.push(StatsRow {
            metric: "Matching".to_string(),
            count: view.total.to_string(),
        });
        rows.push(StatsRow {
            metric: "Matching done".to_string(),
            count: view.completed.to_string(),
        });
    }

    rows.push(StatsRow {
        metric: "Progress".to_string(),
        count: format!("{}%", view.progress_percentage),
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
