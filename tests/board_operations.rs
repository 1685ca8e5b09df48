use neurozen_board::core::config::BoardConfig;
use neurozen_board::core::errors::StoreError;
use neurozen_board::core::seed::seeded_board;
use neurozen_board::core::store::Board;
use neurozen_board::models::{ColumnId, Subtask, TaskDraft, TaskPatch};
use rstest::{fixture, rstest};

#[fixture]
fn board() -> Board {
    seeded_board(&BoardConfig::default()).expect("seed board")
}

fn ids(board: &Board, column_id: ColumnId) -> Vec<String> {
    board.column(column_id).unwrap().task_ids.clone()
}

/// Board with tasks a, b, c, d in `todo`, in that order.
#[fixture]
fn four_in_todo() -> (Board, Vec<String>) {
    let mut board = Board::default();
    let ids = ["a", "b", "c", "d"]
        .iter()
        .map(|t| board.add_task(ColumnId::ToDo, TaskDraft::titled(*t)).unwrap())
        .collect();
    (board, ids)
}

// ---- add_task ----

#[rstest]
fn add_then_lookup(mut board: Board) {
    let id = board.add_task(ColumnId::ToDo, TaskDraft::titled("X")).unwrap();

    assert_eq!(board.task(&id).unwrap().title, "X");
    assert_eq!(ids(&board, ColumnId::ToDo).last(), Some(&id));
    assert_eq!(board.check_integrity(), Ok(()));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn add_defaults_blank_title(mut board: Board, #[case] title: Option<&str>) {
    let draft = TaskDraft {
        title: title.map(str::to_string),
        ..TaskDraft::default()
    };
    let id = board.add_task(ColumnId::Pending, draft).unwrap();

    let task = board.task(&id).unwrap();
    assert_eq!(task.title, "New Task");
    assert!(task.subtasks.is_empty());
    assert_eq!(task.description, None);
    assert_eq!(task.deadline, None);
    assert!(task.labels.is_empty());
}

#[rstest]
fn add_copies_optional_fields(mut board: Board) {
    let draft = TaskDraft::titled("Write docs")
        .description("README first")
        .labels(["docs", "writing"])
        .deadline("2025-09-01");
    let id = board.add_task(ColumnId::Done, draft).unwrap();

    let task = board.task(&id).unwrap();
    assert_eq!(task.description.as_deref(), Some("README first"));
    assert_eq!(task.labels, vec!["docs", "writing"]);
    assert_eq!(task.deadline.as_deref(), Some("2025-09-01"));
}

#[rstest]
fn add_uses_configured_default_title() {
    let config = BoardConfig {
        default_task_title: "Untitled".into(),
        ..BoardConfig::default()
    };
    let mut board = seeded_board(&config).unwrap();
    let id = board.add_task(ColumnId::ToDo, TaskDraft::default()).unwrap();
    assert_eq!(board.task(&id).unwrap().title, "Untitled");
}

#[rstest]
fn rapid_adds_get_distinct_ids(mut board: Board) {
    let ids: Vec<String> = (0..200)
        .map(|i| board.add_task(ColumnId::ToDo, TaskDraft::titled(format!("t{i}"))).unwrap())
        .collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(board.task_count(), 202);
}

// ---- move_task ----

#[rstest]
fn move_across_columns() {
    let mut board = Board::default();
    let id = board.add_task(ColumnId::ToDo, TaskDraft::titled("1")).unwrap();

    assert_eq!(board.move_task(&id, ColumnId::ToDo, ColumnId::Done, 0), Ok(0));

    assert!(ids(&board, ColumnId::ToDo).is_empty());
    assert_eq!(ids(&board, ColumnId::Done), vec![id]);
}

#[rstest]
fn move_seed_task_keeps_task_mapping(mut board: Board) {
    let before = board.tasks().clone();
    board.move_task("1", ColumnId::ToDo, ColumnId::InProgress, 0).unwrap();

    assert_eq!(board.tasks(), &before);
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["1", "2"]);
    assert_eq!(board.column_of("1"), Some(ColumnId::InProgress));
}

#[rstest]
#[case(0, 0, ["a", "b", "c", "d"])]
#[case(0, 2, ["b", "c", "a", "d"])]
#[case(0, 3, ["b", "c", "d", "a"])]
#[case(3, 0, ["d", "a", "b", "c"])]
#[case(2, 1, ["a", "c", "b", "d"])]
#[case(1, 99, ["a", "c", "d", "b"])]
fn move_within_column(
    four_in_todo: (Board, Vec<String>),
    #[case] from: usize,
    #[case] to: usize,
    #[case] expected: [&str; 4],
) {
    let (mut board, ids_in_order) = four_in_todo;
    board
        .move_task(&ids_in_order[from], ColumnId::ToDo, ColumnId::ToDo, to)
        .unwrap();

    let titles: Vec<String> = board
        .tasks_in(ColumnId::ToDo)
        .unwrap()
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, expected);
}

#[rstest]
fn move_clamps_index_past_the_end(mut board: Board) {
    let used = board.move_task("1", ColumnId::ToDo, ColumnId::InProgress, 42).unwrap();
    assert_eq!(used, 1);
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["2", "1"]);
}

#[rstest]
fn same_slot_move_is_idempotent(four_in_todo: (Board, Vec<String>)) {
    let (mut board, ids_in_order) = four_in_todo;
    let before = board.clone();

    for (index, id) in ids_in_order.iter().enumerate() {
        board.move_task(id, ColumnId::ToDo, ColumnId::ToDo, index).unwrap();
        assert_eq!(board, before);
    }
}

#[rstest]
#[case("missing", ColumnId::ToDo, StoreError::TaskNotFound("missing".into()))]
#[case("1", ColumnId::Done, StoreError::NotInColumn { task_id: "1".into(), column_id: "done".into() })]
fn failed_move_leaves_board_untouched(
    mut board: Board,
    #[case] task_id: &str,
    #[case] source: ColumnId,
    #[case] expected: StoreError,
) {
    let before = board.clone();
    assert_eq!(board.move_task(task_id, source, ColumnId::Pending, 0), Err(expected));
    assert_eq!(board, before);
}

#[rstest]
fn move_into_absent_column_is_rejected() {
    let mut board = Board::new(vec![ColumnId::ToDo, ColumnId::Done]);
    let id = board.add_task(ColumnId::ToDo, TaskDraft::titled("x")).unwrap();
    let before = board.clone();

    assert_eq!(
        board.move_task(&id, ColumnId::ToDo, ColumnId::Pending, 0),
        Err(StoreError::ColumnNotFound("pending".into()))
    );
    assert_eq!(board, before);
}

// ---- edit_task / edit_task_details ----

#[rstest]
fn edit_replaces_title_verbatim(mut board: Board) {
    board.edit_task("1", "  Build the store  ").unwrap();
    assert_eq!(board.task("1").unwrap().title, "  Build the store  ");
}

#[rstest]
fn edit_reports_missing_task_and_blank_title(mut board: Board) {
    let before = board.clone();
    assert_eq!(
        board.edit_task("nope", "Title"),
        Err(StoreError::TaskNotFound("nope".into()))
    );
    assert!(matches!(board.edit_task("1", " "), Err(StoreError::InvalidInput(_))));
    assert_eq!(board, before);
}

#[rstest]
fn patch_preserves_unspecified_fields(mut board: Board) {
    let before = board.task("1").unwrap().clone();
    board
        .edit_task_details("1", TaskPatch::new().deadline("2025-09-01"))
        .unwrap();

    let after = board.task("1").unwrap();
    assert_eq!(after.deadline.as_deref(), Some("2025-09-01"));
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.labels, before.labels);
    assert_eq!(after.subtasks, before.subtasks);
}

#[rstest]
fn patch_replaces_collections_wholesale(mut board: Board) {
    board
        .edit_task_details(
            "1",
            TaskPatch::new().labels(["rust"]).subtasks(vec![Subtask::new("s1".into(), "One".into())]),
        )
        .unwrap();
    board
        .edit_task_details("1", TaskPatch::new().subtasks(vec![Subtask::new("s2".into(), "Two".into())]))
        .unwrap();

    let task = board.task("1").unwrap();
    assert_eq!(task.labels, vec!["rust"]);
    assert_eq!(task.subtasks.len(), 1);
    assert_eq!(task.subtasks[0].id, "s2");
}

#[rstest]
fn patch_can_clear_optional_fields(mut board: Board) {
    board
        .edit_task_details("1", TaskPatch::new().clear_description().clear_deadline())
        .unwrap();
    let task = board.task("1").unwrap();
    assert_eq!(task.description, None);
    assert_eq!(task.deadline, None);
}

#[rstest]
fn invalid_patches_are_rejected_whole(mut board: Board) {
    let before = board.clone();
    let duplicate = vec![
        Subtask::new("s".into(), "One".into()),
        Subtask::new("s".into(), "Two".into()),
    ];

    assert!(matches!(
        board.edit_task_details("1", TaskPatch::new().deadline("2030-01-01").subtasks(duplicate)),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(matches!(
        board.edit_task_details("1", TaskPatch::new().title("").labels(["x"])),
        Err(StoreError::InvalidInput(_))
    ));
    assert_eq!(
        board.edit_task_details("ghost", TaskPatch::new().labels(["x"])),
        Err(StoreError::TaskNotFound("ghost".into()))
    );
    assert_eq!(board, before);
}

// ---- delete_task ----

#[rstest]
fn delete_removes_everywhere(mut board: Board) {
    let removed = board.delete_task("2").unwrap();

    assert_eq!(removed.title, "Setup Tailwind");
    assert!(board.task("2").is_none());
    for column in board.columns() {
        assert!(!column.contains("2"), "{} still lists task 2", column.id);
    }
    assert_eq!(board.check_integrity(), Ok(()));
}

#[rstest]
fn delete_missing_task_is_reported(mut board: Board) {
    let before = board.clone();
    assert_eq!(board.delete_task("404"), Err(StoreError::TaskNotFound("404".into())));
    assert_eq!(board, before);
}

// ---- subtasks ----

#[rstest]
fn subtask_toggle_round_trip(mut board: Board) {
    let subtask_id = board.add_subtask("1", "Define types").unwrap();
    let original = board.task("1").unwrap().subtasks[0].done;

    assert_eq!(board.toggle_subtask("1", &subtask_id), Ok(!original));
    assert_eq!(board.toggle_subtask("1", &subtask_id), Ok(original));
    assert_eq!(board.task("1").unwrap().subtasks[0].done, original);
}

#[rstest]
fn add_subtask_appends_unfinished(mut board: Board) {
    let first = board.add_subtask("2", "Install").unwrap();
    let second = board.add_subtask("2", "Configure").unwrap();

    let task = board.task("2").unwrap();
    let order: Vec<&str> = task.subtasks.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, [first.as_str(), second.as_str()]);
    assert!(task.subtasks.iter().all(|s| !s.done));
    assert_eq!(task.completed_subtasks(), 0);
}

#[rstest]
fn toggling_unknown_subtask_is_a_reported_no_op(mut board: Board) {
    board.add_subtask("1", "Only").unwrap();
    let before = board.clone();

    assert_eq!(
        board.toggle_subtask("1", "missing"),
        Err(StoreError::SubtaskNotFound {
            task_id: "1".into(),
            subtask_id: "missing".into()
        })
    );
    assert_eq!(board, before);
}

#[rstest]
fn blank_subtask_titles_are_rejected(mut board: Board) {
    let before = board.clone();
    assert!(matches!(board.add_subtask("1", "  "), Err(StoreError::InvalidInput(_))));
    assert_eq!(
        board.add_subtask("ghost", "Real"),
        Err(StoreError::TaskNotFound("ghost".into()))
    );
    assert_eq!(board, before);
}
