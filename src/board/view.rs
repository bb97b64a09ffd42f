//! Derived views over the board: search filtering, counts and progress

use crate::models::{Column, TaskStatus};

/// Columns as displayed for a search query, with aggregate figures
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub columns: Vec<Column>,
    /// Tasks across all filtered columns
    pub total: usize,
    /// Tasks in the filtered done column
    pub completed: usize,
    pub progress_percentage: u32,
    pub is_filtered: bool,
}

impl BoardView {
    /// Filter `columns` by `query` and compute the figures over the result
    pub fn compute(columns: &[Column], query: &str) -> Self {
        let columns = filter_columns(columns, query);

        let total = columns.iter().map(Column::len).sum();
        let completed = columns
            .iter()
            .filter(|c| c.status == TaskStatus::Done)
            .map(Column::len)
            .sum();

        BoardView {
            columns,
            total,
            completed,
            progress_percentage: progress_percentage(completed, total),
            is_filtered: !query.trim().is_empty(),
        }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }
}

/// Keep tasks whose title or description contains the trimmed query,
/// ignoring case. A blank query returns the columns unchanged.
pub fn filter_columns(columns: &[Column], query: &str) -> Vec<Column> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return columns.to_vec();
    }

    columns
        .iter()
        .map(|column| Column {
            tasks: column
                .tasks
                .iter()
                .filter(|t| t.matches_query(&needle))
                .cloned()
                .collect(),
            ..column.clone()
        })
        .collect()
}

/// `completed / total` as a whole percentage, halves rounding up; 0 for an
/// empty board
pub fn progress_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u32
}
