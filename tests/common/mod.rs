#![allow(dead_code)]

use std::sync::LazyLock;

use axum_crud_api::{
    db::{create_pool, sync_schema},
    entity::users::ActiveModel as UserActive,
    state::AppState,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use tokio::sync::{Mutex, MutexGuard};

// Tests in one binary share a database; run them one at a time.
static DB_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub struct TestDb {
    pub state: AppState,
    _guard: MutexGuard<'static, ()>,
}

/// Returns `None` when no database is configured so the caller can skip.
pub async fn setup() -> anyhow::Result<Option<TestDb>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run database tests.");
            return Ok(None);
        }
    };

    let guard = DB_LOCK.lock().await;
    let pool = create_pool(&database_url, 5).await?;
    let state = AppState::new(pool);
    sync_schema(&state.orm).await?;

    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "TRUNCATE TABLE orders, profiles, products, clients, users RESTART IDENTITY CASCADE",
        ))
        .await?;

    Ok(Some(TestDb {
        state,
        _guard: guard,
    }))
}

/// Insert a user with a fixed creation time.
pub async fn insert_user_at(
    state: &AppState,
    name: &str,
    email: &str,
    created_at: DateTime<Utc>,
) -> anyhow::Result<i32> {
    let user = UserActive {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(created_at.into()),
        updated_at: Set(created_at.into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}
