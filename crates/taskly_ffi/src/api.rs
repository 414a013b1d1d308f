//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board rendering, drop resolution and recurrence preview to Dart.
//! - Translate core types into flat, string-based DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Snapshot input is the JSON document decoded by `taskly_core::Snapshot`.
//! - Failures are reported in the envelope (`ok=false`, `message`).

use taskly_core::{
    build_board, classify_raw, core_version as core_version_inner,
    init_logging as init_logging_inner, next_due_date, ping as ping_inner, resolve_raw_drag_end,
    Board, DueDate, GroupKey, Move, Recurrence, Snapshot, TaskGroup, ACTIVE_GROUP_ORDER,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Display metadata for one group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMeta {
    /// Wire key, e.g. `this-week`.
    pub key: String,
    pub label: String,
    pub text_color: String,
    pub dot_color: String,
}

/// One rendered group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub meta: GroupMeta,
    /// Task ids in display order.
    pub task_ids: Vec<String>,
}

/// Board rendering envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    pub ok: bool,
    pub groups: Vec<GroupView>,
    pub completed: u32,
    pub total: u32,
    pub percent: u32,
    /// Reminder body, empty when nothing is due.
    pub reminder: String,
    pub message: String,
}

impl BoardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            groups: Vec::new(),
            completed: 0,
            total: 0,
            percent: 0,
            reminder: String::new(),
            message: message.into(),
        }
    }
}

/// Manual index write for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrderEntry {
    pub task_id: String,
    pub sort_order: i64,
}

/// Drop resolution envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResponse {
    pub ok: bool,
    /// `reorder`, `reassign_folder` or `no_op`.
    pub kind: String,
    /// Reordered group key (reorder only).
    pub group: Option<String>,
    /// Reassigned task id (reassign only).
    pub task_id: Option<String>,
    /// Target folder id; `None` means "no folder" (reassign only).
    pub folder_id: Option<String>,
    /// Index batch to persist (reorder only).
    pub sort_orders: Vec<SortOrderEntry>,
    pub message: String,
}

/// Single-value envelope used by date helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueResponse {
    pub ok: bool,
    pub value: Option<String>,
    pub message: String,
}

impl ValueResponse {
    fn success(value: String) -> Self {
        Self {
            ok: true,
            value: Some(value),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value: None,
            message: message.into(),
        }
    }
}

/// Lists display metadata for every active group, then `completed`.
#[flutter_rust_bridge::frb(sync)]
pub fn group_catalog() -> Vec<GroupMeta> {
    ACTIVE_GROUP_ORDER
        .iter()
        .copied()
        .chain(std::iter::once(GroupKey::Completed))
        .map(to_group_meta)
        .collect()
}

/// Renders the grouped board for a JSON snapshot.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; invalid snapshots return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_view(snapshot_json: String) -> BoardResponse {
    let snapshot = match Snapshot::from_json(snapshot_json.as_str()) {
        Ok(snapshot) => snapshot,
        Err(err) => return BoardResponse::failure(format!("board_view failed: {err}")),
    };
    let board = render(&snapshot);
    to_board_response(&board)
}

/// Resolves a drag-end gesture against the board rendered from `snapshot_json`.
///
/// `target_id` accepts `all`, `today`, `folder:<uuid>` or a task uuid.
/// Unresolvable targets return `ok=true, kind=no_op`.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_drop(snapshot_json: String, dragged_id: String, target_id: String) -> DropResponse {
    let snapshot = match Snapshot::from_json(snapshot_json.as_str()) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return DropResponse {
                ok: false,
                kind: "no_op".to_string(),
                group: None,
                task_id: None,
                folder_id: None,
                sort_orders: Vec::new(),
                message: format!("resolve_drop failed: {err}"),
            }
        }
    };
    let board = render(&snapshot);
    let mv = resolve_raw_drag_end(
        dragged_id.as_str(),
        target_id.as_str(),
        &board.groups,
        &snapshot.folders,
    );
    log::debug!(
        "event=drop_resolve module=ffi status=ok noop={}",
        mv.is_noop()
    );
    to_drop_response(&mv)
}

/// Previews the next due date for a recurrence rule.
#[flutter_rust_bridge::frb(sync)]
pub fn next_occurrence(due_date: String, recurrence: String) -> ValueResponse {
    let parsed = DueDate::parse(due_date.trim()).and_then(|due| {
        let rule = recurrence.trim().parse::<Recurrence>()?;
        next_due_date(due.date(), rule)
    });
    match parsed {
        Ok(next) => ValueResponse::success(DueDate::from(next).to_string()),
        Err(err) => ValueResponse::failure(format!("next_occurrence failed: {err}")),
    }
}

/// Classifies one due date (`None` = no date) relative to `today`.
#[flutter_rust_bridge::frb(sync)]
pub fn classify_due_date(due_date: Option<String>, today: String) -> ValueResponse {
    let today = match DueDate::parse(today.trim()) {
        Ok(today) => today.date(),
        Err(err) => return ValueResponse::failure(format!("classify_due_date failed: {err}")),
    };
    match classify_raw(due_date.as_deref().map(str::trim), today) {
        Ok(key) => ValueResponse::success(key.as_str().to_string()),
        Err(err) => ValueResponse::failure(format!("classify_due_date failed: {err}")),
    }
}

fn render(snapshot: &Snapshot) -> Board {
    build_board(
        &snapshot.tasks,
        &snapshot.folders,
        &snapshot.view,
        snapshot.today.date(),
    )
}

fn to_group_meta(key: GroupKey) -> GroupMeta {
    let style = key.style();
    GroupMeta {
        key: key.as_str().to_string(),
        label: style.label.to_string(),
        text_color: style.text_color.to_string(),
        dot_color: style.dot_color.to_string(),
    }
}

fn to_group_view(group: &TaskGroup) -> GroupView {
    GroupView {
        meta: to_group_meta(group.key),
        task_ids: group.tasks.iter().map(|task| task.id.to_string()).collect(),
    }
}

fn to_board_response(board: &Board) -> BoardResponse {
    BoardResponse {
        ok: true,
        groups: board.groups.iter().map(to_group_view).collect(),
        completed: saturating_u32(board.progress.completed),
        total: saturating_u32(board.progress.total),
        percent: u32::from(board.progress.percent),
        reminder: board.reminders.message().unwrap_or_default(),
        message: format!("Rendered {} group(s).", board.groups.len()),
    }
}

fn to_drop_response(mv: &Move) -> DropResponse {
    let sort_orders = mv
        .sort_order_updates()
        .into_iter()
        .map(|update| SortOrderEntry {
            task_id: update.task_id.to_string(),
            sort_order: update.sort_order,
        })
        .collect();
    let (kind, group, task_id, folder_id) = match mv {
        Move::Reorder { group, .. } => ("reorder", Some(group.as_str().to_string()), None, None),
        Move::ReassignFolder { task_id, folder_id } => (
            "reassign_folder",
            None,
            Some(task_id.to_string()),
            folder_id.map(|id| id.to_string()),
        ),
        Move::NoOp => ("no_op", None, None, None),
    };
    DropResponse {
        ok: true,
        kind: kind.to_string(),
        group,
        task_id,
        folder_id,
        sort_orders,
        message: String::new(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
