use chrono::{NaiveDate, Utc};
use taskly_core::{
    apply_move, group_tasks, resolve_drag_end, resolve_raw_drag_end, sort_tasks, DropTarget,
    DueDate, Folder, GroupKey, Move, SortOrderUpdate, SortPolicy, Task, TaskFilter, TaskGroup,
};
use uuid::Uuid;

fn task(title: &str) -> Task {
    Task::new(Uuid::new_v4(), title).unwrap()
}

fn this_week_group(tasks: &[Task]) -> TaskGroup {
    TaskGroup {
        key: GroupKey::ThisWeek,
        tasks: tasks.to_vec(),
    }
}

#[test]
fn drag_onto_task_in_same_group_reorders() {
    let (b, a, c) = (task("B"), task("A"), task("C"));
    let groups = vec![this_week_group(&[b.clone(), a.clone(), c.clone()])];

    let mv = resolve_drag_end(a.id, DropTarget::Task(b.id), &groups, &[]);

    assert_eq!(
        mv,
        Move::Reorder {
            group: GroupKey::ThisWeek,
            ordered: vec![a.id, b.id, c.id],
        }
    );
    assert_eq!(
        mv.sort_order_updates(),
        vec![
            SortOrderUpdate {
                task_id: a.id,
                sort_order: 0,
            },
            SortOrderUpdate {
                task_id: b.id,
                sort_order: 1,
            },
            SortOrderUpdate {
                task_id: c.id,
                sort_order: 2,
            },
        ]
    );
}

#[test]
fn drag_down_uses_array_move_not_swap() {
    let (a, b, c, d) = (task("A"), task("B"), task("C"), task("D"));
    let groups = vec![this_week_group(&[a.clone(), b.clone(), c.clone(), d.clone()])];

    let mv = resolve_drag_end(a.id, DropTarget::Task(c.id), &groups, &[]);
    assert_eq!(
        mv,
        Move::Reorder {
            group: GroupKey::ThisWeek,
            ordered: vec![b.id, c.id, a.id, d.id],
        }
    );
}

#[test]
fn reorder_round_trips_through_due_date_sort() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let due = Some(DueDate::parse("2024-06-12").unwrap());
    let tasks = vec![
        task("first").with_due_date(due),
        task("second").with_due_date(due),
        task("third").with_due_date(due),
        task("fourth").with_due_date(due),
    ];
    let groups = group_tasks(&tasks, TaskFilter::All, SortPolicy::DueDate, today);
    let dragged = tasks[3].id;
    let target = tasks[0].id;

    let mv = resolve_drag_end(dragged, DropTarget::Task(target), &groups, &[]);
    let Move::Reorder { ordered, .. } = &mv else {
        panic!("expected reorder, got {mv:?}");
    };

    let updated = apply_move(&tasks, &mv);
    let resorted = sort_tasks(&updated, SortPolicy::DueDate)
        .iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    assert_eq!(&resorted, ordered);

    let regrouped = group_tasks(&updated, TaskFilter::All, SortPolicy::DueDate, today);
    assert_eq!(&regrouped[0].task_ids(), ordered);
}

#[test]
fn self_drop_missing_target_and_cross_group_are_noops() {
    let (a, b, c) = (task("A"), task("B"), task("C"));
    let groups = vec![
        this_week_group(&[a.clone(), b.clone()]),
        TaskGroup {
            key: GroupKey::NoDate,
            tasks: vec![c.clone()],
        },
    ];

    assert_eq!(
        resolve_drag_end(a.id, DropTarget::Task(a.id), &groups, &[]),
        Move::NoOp
    );
    assert_eq!(
        resolve_drag_end(a.id, DropTarget::Task(Uuid::new_v4()), &groups, &[]),
        Move::NoOp
    );
    assert_eq!(
        resolve_drag_end(a.id, DropTarget::Task(c.id), &groups, &[]),
        Move::NoOp
    );
    assert_eq!(
        resolve_drag_end(Uuid::new_v4(), DropTarget::Task(a.id), &groups, &[]),
        Move::NoOp
    );
}

fn folder(name: &str) -> Folder {
    Folder::new(Uuid::new_v4(), name, "#3b82f6", Utc::now()).unwrap()
}

#[test]
fn folder_targets_reassign_and_today_is_rejected() {
    let work = folder("Work");
    let folders = vec![work.clone()];
    let filed = task("filed").with_folder(Some(work.id));
    let loose = task("loose");
    let groups = vec![this_week_group(&[filed.clone(), loose.clone()])];

    assert_eq!(
        resolve_drag_end(loose.id, DropTarget::Folder(work.id), &groups, &folders),
        Move::ReassignFolder {
            task_id: loose.id,
            folder_id: Some(work.id),
        }
    );
    assert_eq!(
        resolve_drag_end(filed.id, DropTarget::AllTasks, &groups, &folders),
        Move::ReassignFolder {
            task_id: filed.id,
            folder_id: None,
        }
    );
    assert_eq!(
        resolve_drag_end(filed.id, DropTarget::Folder(work.id), &groups, &folders),
        Move::NoOp
    );
    assert_eq!(
        resolve_drag_end(loose.id, DropTarget::AllTasks, &groups, &folders),
        Move::NoOp
    );
    assert_eq!(
        resolve_drag_end(loose.id, DropTarget::Today, &groups, &folders),
        Move::NoOp
    );
}

#[test]
fn drop_onto_unknown_folder_is_noop() {
    let work = folder("Work");
    let filed = task("filed").with_folder(Some(work.id));
    let groups = vec![this_week_group(&[filed.clone()])];
    let stray = DropTarget::Folder(Uuid::new_v4());

    assert_eq!(
        resolve_drag_end(filed.id, stray, &groups, &[work.clone()]),
        Move::NoOp
    );
    assert_eq!(resolve_drag_end(filed.id, stray, &groups, &[]), Move::NoOp);
    assert_eq!(
        resolve_raw_drag_end(&filed.id.to_string(), &stray.to_raw(), &groups, &[work]),
        Move::NoOp
    );
}

#[test]
fn raw_identifiers_resolve_or_noop() {
    let errands = folder("Errands");
    let folders = vec![errands.clone()];
    let (a, b) = (task("A"), task("B"));
    let groups = vec![this_week_group(&[a.clone(), b.clone()])];

    assert_eq!(
        resolve_raw_drag_end(&b.id.to_string(), &a.id.to_string(), &groups, &folders),
        Move::Reorder {
            group: GroupKey::ThisWeek,
            ordered: vec![b.id, a.id],
        }
    );
    assert_eq!(
        resolve_raw_drag_end(
            &a.id.to_string(),
            &format!("folder:{}", errands.id),
            &groups,
            &folders,
        ),
        Move::ReassignFolder {
            task_id: a.id,
            folder_id: Some(errands.id),
        }
    );
    assert_eq!(
        resolve_raw_drag_end("not-a-uuid", "all", &groups, &folders),
        Move::NoOp
    );
    assert_eq!(
        resolve_raw_drag_end(&a.id.to_string(), "sidebar", &groups, &folders),
        Move::NoOp
    );
}

#[test]
fn apply_move_returns_new_snapshot() {
    let folder_id = Uuid::new_v4();
    let (a, b) = (task("A"), task("B"));
    let tasks = vec![a.clone(), b.clone()];

    let moved = apply_move(
        &tasks,
        &Move::ReassignFolder {
            task_id: b.id,
            folder_id: Some(folder_id),
        },
    );
    assert_eq!(moved[0], a);
    assert_eq!(moved[1].folder_id, Some(folder_id));
    assert_eq!(tasks[1].folder_id, None);

    assert_eq!(apply_move(&tasks, &Move::NoOp), tasks);
}

#[test]
fn move_serializes_with_kind_tag() {
    let a = task("A");
    let value = serde_json::to_value(Move::Reorder {
        group: GroupKey::ThisWeek,
        ordered: vec![a.id],
    })
    .unwrap();
    assert_eq!(value["kind"], "reorder");
    assert_eq!(value["group"], "this-week");
    assert_eq!(serde_json::to_value(Move::NoOp).unwrap()["kind"], "no_op");
}
