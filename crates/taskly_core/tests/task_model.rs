use chrono::{TimeZone, Utc};
use taskly_core::{DueDate, Priority, Recurrence, Task, ValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let owner = Uuid::new_v4();
    let task = Task::new(owner, "  buy milk  ").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.owner_id, owner);
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.folder_id, None);
    assert_eq!(task.notes, None);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
    assert_eq!(task.priority, None);
    assert_eq!(task.recurrence, None);
    assert_eq!(task.sort_order, None);
    assert!(task.tags.is_empty());
}

#[test]
fn constructors_reject_blank_title_and_nil_ids() {
    assert_eq!(
        Task::new(Uuid::new_v4(), "   ").unwrap_err(),
        ValidationError::BlankTitle
    );
    assert_eq!(
        Task::new(Uuid::nil(), "title").unwrap_err(),
        ValidationError::NilId("owner id")
    );
    assert_eq!(
        Task::with_id(Uuid::nil(), Uuid::new_v4(), "title", Utc::now()).unwrap_err(),
        ValidationError::NilId("task id")
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let owner = Uuid::parse_str("66666666-7777-4888-9999-000000000000").unwrap();
    let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
    let task = Task::with_id(id, owner, "file taxes", created_at)
        .unwrap()
        .with_due_date(Some(DueDate::parse("2024-06-15").unwrap()))
        .with_priority(Some(Priority::High))
        .with_recurrence(Some(Recurrence::Yearly))
        .with_sort_order(Some(3));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["owner_id"], owner.to_string());
    assert_eq!(json["title"], "file taxes");
    assert_eq!(json["due_date"], "2024-06-15");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["recurrence"], "yearly");
    assert_eq!(json["sort_order"], 3);
    assert_eq!(json["completed"], false);
    assert_eq!(json["folder_id"], serde_json::Value::Null);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_accepts_sparse_rows_and_list_id_alias() {
    let folder = Uuid::new_v4();
    let value = serde_json::json!({
        "id": Uuid::new_v4(),
        "owner_id": Uuid::new_v4(),
        "list_id": folder,
        "title": "sparse",
        "created_at": "2024-06-01T00:00:00Z"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.folder_id, Some(folder));
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
}

#[test]
fn deserialize_rejects_corrupt_rows() {
    let base = serde_json::json!({
        "id": Uuid::new_v4(),
        "owner_id": Uuid::new_v4(),
        "title": "row",
        "created_at": "2024-06-01T00:00:00Z"
    });

    let mut bad_date = base.clone();
    bad_date["due_date"] = serde_json::json!("2024-6-1");
    let err = serde_json::from_value::<Task>(bad_date).unwrap_err();
    assert!(
        err.to_string().contains("invalid due date"),
        "unexpected error: {err}"
    );

    let mut bad_priority = base.clone();
    bad_priority["priority"] = serde_json::json!("urgent");
    assert!(serde_json::from_value::<Task>(bad_priority).is_err());

    let mut bad_recurrence = base.clone();
    bad_recurrence["recurrence"] = serde_json::json!("hourly");
    assert!(serde_json::from_value::<Task>(bad_recurrence).is_err());

    let mut blank_title = base;
    blank_title["title"] = serde_json::json!("  ");
    let err = serde_json::from_value::<Task>(blank_title).unwrap_err();
    assert!(
        err.to_string().contains("title must not be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn set_completed_reports_the_completion_edge() {
    let task = Task::new(Uuid::new_v4(), "ship").unwrap();

    let done = task.set_completed(true);
    assert!(done.newly_completed);
    assert!(done.task.completed);
    assert!(!task.completed);

    assert!(!task.set_completed(false).newly_completed);
    assert!(!done.task.set_completed(true).newly_completed);
}
