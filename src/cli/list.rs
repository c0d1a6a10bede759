//! `tally --list` output: task table, statistics line, and due-date notices

use crate::task::{Task, TaskList};

const TABLE_COL_INDEX: usize = 4;
const TABLE_COL_TITLE: usize = 32;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_DONE: usize = 4;
const TABLE_COL_CREATED: usize = 10;

pub fn run(tasks: &TaskList) {
    if tasks.is_empty() {
        println!("No tasks yet. Create one with --add");
        return;
    }

    let rows: Vec<&Task> = tasks.tasks().iter().collect();
    print_table(&rows);

    println!();
    print_stats(tasks);
    print_notices(tasks);
}

pub fn print_table(rows: &[&Task]) {
    print_table_header();
    for (index, task) in rows.iter().enumerate() {
        print_table_row(index, task);
    }
}

pub fn print_stats(tasks: &TaskList) {
    let stats = tasks.statistics();
    println!(
        "Total: {} | Completed: {} | Pending: {} | High priority: {}",
        stats.total, stats.completed, stats.pending, stats.high_priority
    );
}

fn print_table_header() {
    println!(
        "{:<width_index$} {:<width_title$} {:<width_priority$} {:<width_done$} {:<width_created$} DUE",
        "#",
        "TITLE",
        "PRIORITY",
        "DONE",
        "CREATED",
        width_index = TABLE_COL_INDEX,
        width_title = TABLE_COL_TITLE,
        width_priority = TABLE_COL_PRIORITY,
        width_done = TABLE_COL_DONE,
        width_created = TABLE_COL_CREATED
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_INDEX
                + TABLE_COL_TITLE
                + TABLE_COL_PRIORITY
                + TABLE_COL_DONE
                + TABLE_COL_CREATED
                + 15
        )
    );
}

fn print_table_row(index: usize, task: &Task) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let done = if task.completed { "✓" } else { "·" };
    let created = task.created_at.format("%Y-%m-%d").to_string();
    let due = task
        .due
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    println!(
        "{:<width_index$} {:<width_title$} {:<width_priority$} {:<width_done$} {:<width_created$} {}",
        index,
        title,
        task.priority.label(),
        done,
        created,
        due,
        width_index = TABLE_COL_INDEX,
        width_title = TABLE_COL_TITLE,
        width_priority = TABLE_COL_PRIORITY,
        width_done = TABLE_COL_DONE,
        width_created = TABLE_COL_CREATED
    );
}

fn print_notices(tasks: &TaskList) {
    let due_today = tasks.due_today();
    if !due_today.is_empty() {
        println!("\nDue today:");
        for task in due_today {
            println!("  - {}", task.title);
        }
    }

    let overdue = tasks.overdue();
    if !overdue.is_empty() {
        println!("\nOverdue:");
        for task in overdue {
            println!("  - {}", task.title);
        }
    }
}
