//! PgTaskStore Tests
//!
//! SQLx native tests: each test gets its own database with migrations
//! applied, rolled away automatically afterwards. Requires `DATABASE_URL`.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use todo_core::models::{Task, TaskFilter};
use todo_core::store::{PgTaskStore, TaskStore};
use todo_core::TodoError;

fn sample(title: &str) -> Task {
    let now = Utc::now();
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        is_completed: false,
        created_at: now,
        updated_at: now,
    }
}

#[sqlx::test]
async fn insert_find_update_delete_roundtrip(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    let task = store.insert(sample("Buy milk")).await?;
    assert_eq!(task.title, "Buy milk");
    assert!(!task.is_completed);

    let found = store
        .find_by_id(task.id)
        .await?
        .ok_or(TodoError::TaskNotFound(task.id))?;
    assert_eq!(found, task);

    let mut renamed = found;
    renamed.title = "Buy bread".to_string();
    renamed.updated_at = Utc::now();
    let updated = store.update(renamed.clone()).await?;
    assert_eq!(updated.title, "Buy bread");
    assert_eq!(updated.created_at, task.created_at);

    store.delete(task.id).await?;
    assert!(store.find_by_id(task.id).await?.is_none());

    Ok(())
}

#[sqlx::test]
async fn unique_index_backstop_maps_to_duplicate_task(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    store.insert(sample("Buy milk")).await?;

    // Second insert bypasses any pre-check; the index itself must reject it.
    let err = store.insert(sample("Buy milk")).await.unwrap_err();
    assert_eq!(err, TodoError::DuplicateTask("Buy milk".to_string()));

    Ok(())
}

#[sqlx::test]
async fn update_into_existing_title_maps_to_duplicate_task(
    pool: PgPool,
) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    store.insert(sample("First")).await?;
    let second = store.insert(sample("Second")).await?;

    let mut colliding = second;
    colliding.title = "First".to_string();
    colliding.updated_at = Utc::now();

    let err = store.update(colliding).await.unwrap_err();
    assert_eq!(err, TodoError::DuplicateTask("First".to_string()));

    Ok(())
}

#[sqlx::test]
async fn update_of_missing_row_is_not_found(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    let ghost = sample("Ghost");
    let err = store.update(ghost.clone()).await.unwrap_err();
    assert_eq!(err, TodoError::TaskNotFound(ghost.id));

    Ok(())
}

#[sqlx::test]
async fn exists_by_title_honors_exclusion(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    let task = store.insert(sample("Buy milk")).await?;

    assert!(store.exists_by_title("Buy milk", None).await?);
    assert!(!store.exists_by_title("Buy milk", Some(task.id)).await?);
    assert!(!store.exists_by_title("buy milk", None).await?); // case-sensitive
    assert!(!store.exists_by_title("Buy bread", None).await?);

    Ok(())
}

#[sqlx::test]
async fn find_all_filters_and_orders_newest_first(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);
    let base = Utc::now();

    for (offset, title, completed) in [(2, "oldest", true), (1, "middle", false), (0, "newest", true)] {
        let mut task = sample(title);
        task.created_at = base - Duration::minutes(offset);
        task.updated_at = task.created_at;
        task.is_completed = completed;
        store.insert(task).await?;
    }

    let all = store.find_all(TaskFilter::All).await?;
    let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);

    let active = store.find_all(TaskFilter::Active).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "middle");

    let completed = store.find_all(TaskFilter::Completed).await?;
    assert_eq!(completed.len(), 2);

    Ok(())
}

#[sqlx::test]
async fn delete_all_completed_is_batch_and_vacuous(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    // Vacuous success on an empty table.
    store.delete_all_completed().await?;

    let mut done = sample("Done");
    done.is_completed = true;
    store.insert(done).await?;
    store.insert(sample("Pending")).await?;

    store.delete_all_completed().await?;

    let remaining = store.find_all(TaskFilter::All).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Pending");

    Ok(())
}

#[sqlx::test]
async fn set_all_completed_bumps_every_updated_at(pool: PgPool) -> todo_core::Result<()> {
    let store = PgTaskStore::new(pool);

    let mut stale = sample("Stale");
    stale.created_at = Utc::now() - Duration::minutes(5);
    stale.updated_at = stale.created_at;
    let stale = store.insert(stale).await?;

    store.set_all_completed(true).await?;

    let after = store
        .find_by_id(stale.id)
        .await?
        .ok_or(TodoError::TaskNotFound(stale.id))?;
    assert!(after.is_completed);
    assert!(after.updated_at > stale.updated_at);

    // Rows already at the target value still get touched.
    let touched_at = after.updated_at;
    store.set_all_completed(true).await?;
    let again = store
        .find_by_id(stale.id)
        .await?
        .ok_or(TodoError::TaskNotFound(stale.id))?;
    assert!(again.updated_at >= touched_at);

    Ok(())
}
