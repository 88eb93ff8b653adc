use chrono::{TimeZone, Utc};
use integration_tests::{expected_seed, test_store, title_update};
use task_domain::DomainError;

#[tokio::test]
async fn seed_then_add_then_delete_restores_the_original_listing() {
    let store = test_store();

    // シード状態: 4件、完了は1件
    let seeded = store.all_tasks().await;
    assert_eq!(seeded.len(), 4);
    assert_eq!(seeded.iter().filter(|t| t.completed).count(), 1);

    // "Buy milk" を追加すると5件になり、未完了で現れる
    let created = store
        .add_task("Buy milk".to_string(), String::new())
        .await
        .unwrap();
    let after_add = store.all_tasks().await;
    assert_eq!(after_add.len(), 5);
    let found = after_add.iter().find(|t| t.title == "Buy milk").unwrap();
    assert!(!found.completed);
    assert_eq!(found.id, created.id);

    // 追加したタスクを削除すると、シードと同じ内容に戻る
    assert!(store.delete_task(&created.id).await);
    let after_delete = store.all_tasks().await;
    assert_eq!(after_delete.len(), 4);
    for ((task, seed_task), (title, completed)) in
        after_delete.iter().zip(&seeded).zip(expected_seed())
    {
        assert_eq!(task.title, title);
        assert_eq!(task.completed, completed);
        assert_eq!(task.title, seed_task.title);
        assert_eq!(task.description, seed_task.description);
        assert_eq!(task.completed, seed_task.completed);
    }
}

#[tokio::test]
async fn seed_timestamps_match_the_original_fixture() {
    let store = test_store();
    let tasks = store.all_tasks().await;

    for (i, task) in tasks.iter().enumerate() {
        let expected = Utc
            .with_ymd_and_hms(2024, 10, 22, 10 + i as u32, 0, 0)
            .unwrap();
        assert_eq!(task.created_at, expected);
    }
}

#[tokio::test]
async fn records_marshal_to_the_ui_boundary_format() {
    let store = test_store();
    let tasks = store.all_tasks().await;

    let json = serde_json::to_value(&tasks).unwrap();
    assert_eq!(json[0]["title"], "Настроить проект");
    assert_eq!(json[0]["completed"], true);
    // ID は透過的な文字列として現れる
    assert!(json[0]["id"].is_string());
    assert_eq!(json[1]["completed"], false);
}

#[tokio::test]
async fn ids_are_never_reused_within_a_process() {
    let store = test_store();

    let first = store
        .add_task("One".to_string(), String::new())
        .await
        .unwrap();
    assert!(store.delete_task(&first.id).await);

    let second = store
        .add_task("One".to_string(), String::new())
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    // 削除済み ID は見つからないまま
    assert!(store.task_by_id(&first.id).await.is_none());
    assert!(store.task_by_id(&second.id).await.is_some());
}

#[tokio::test]
async fn toggle_twice_round_trips_through_the_store() {
    let store = test_store();
    let target = store.all_tasks().await[3].clone();

    let once = store.toggle_completion(&target.id).await.unwrap();
    assert_eq!(once.completed, !target.completed);

    let twice = store.toggle_completion(&target.id).await.unwrap();
    assert_eq!(twice.completed, target.completed);
}

#[tokio::test]
async fn update_via_store_preserves_untouched_fields() {
    let store = test_store();
    let original = store.all_tasks().await[2].clone();

    let updated = store
        .update_task(&original.id, title_update("X"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "X");
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.completed, original.completed);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.id, original.id);

    // 取り直しても同じ内容
    let fetched = store.task_by_id(&original.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn invalid_input_is_rejected_without_mutation() {
    let store = test_store();

    let err = store
        .add_task(String::new(), "desc".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::EmptyTitle);

    let target = store.all_tasks().await[0].clone();
    let err = store
        .update_task(&target.id, title_update("   "))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::EmptyTitle);

    // どちらの失敗もストアを変えない
    let tasks = store.all_tasks().await;
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0].title, target.title);
}
