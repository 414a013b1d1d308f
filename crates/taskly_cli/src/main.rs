//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskly_core` linkage (`ping`, version).
//! - Render a JSON snapshot as a grouped text board for quick local checks.
//!
//! Usage:
//! - `taskly_cli` prints ping/version.
//! - `taskly_cli board <snapshot.json>` prints the grouped board.
//! - `taskly_cli next <YYYY-MM-DD> <daily|weekly|monthly|yearly>` prints the
//!   next occurrence date.
//!
//! Set `TASKLY_LOG_DIR` to an absolute path to enable file logging.

use std::process::ExitCode;
use taskly_core::{
    build_board, default_log_level, init_logging, next_due_date, Board, DueDate, Recurrence,
    Snapshot,
};

const USAGE: &str = "usage: taskly_cli [board <snapshot.json> | next <date> <rule>]";

fn main() -> ExitCode {
    if let Ok(dir) = std::env::var("TASKLY_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), dir.as_str()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();
    let result = match argv.as_slice() {
        [] => {
            println!("taskly_core ping={}", taskly_core::ping());
            println!("taskly_core version={}", taskly_core::core_version());
            Ok(())
        }
        ["board", path] => print_board(path),
        ["next", due, rule] => print_next(due, rule),
        _ => Err(USAGE.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn print_board(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read snapshot `{path}`: {err}"))?;
    let snapshot = Snapshot::from_json(raw.as_str())
        .map_err(|err| err.to_string())?;
    let board = build_board(
        &snapshot.tasks,
        &snapshot.folders,
        &snapshot.view,
        snapshot.today.date(),
    );
    log::info!(
        "event=cli_board module=cli status=ok groups={}",
        board.groups.len()
    );
    print!("{}", render_board(&board));
    Ok(())
}

fn render_board(board: &Board) -> String {
    let mut out = String::new();
    if board.groups.is_empty() {
        out.push_str("No tasks.\n");
    }
    for group in &board.groups {
        out.push_str(&format!("{} ({})\n", group.key.label(), group.tasks.len()));
        for task in &group.tasks {
            match task.due_date {
                Some(due) => out.push_str(&format!("  - {} [{due}]\n", task.title)),
                None => out.push_str(&format!("  - {}\n", task.title)),
            }
        }
    }
    out.push_str(&format!(
        "{} task(s), {} completed ({}%)\n",
        board.progress.total, board.progress.completed, board.progress.percent
    ));
    if let Some(message) = board.reminders.message() {
        out.push_str(&format!("Reminder: {message}\n"));
    }
    out
}

fn print_next(due: &str, rule: &str) -> Result<(), String> {
    let due = DueDate::parse(due).map_err(|err| err.to_string())?;
    let rule = rule.parse::<Recurrence>().map_err(|err| err.to_string())?;
    let next = next_due_date(due.date(), rule)
        .map_err(|err| err.to_string())?;
    println!("{}", DueDate::from(next));
    Ok(())
}
