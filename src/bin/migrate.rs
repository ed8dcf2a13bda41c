use axum_crud_api::{
    config::AppConfig,
    db::{create_pool, sync_schema},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, 1).await?;
    let state = AppState::new(pool);
    sync_schema(&state.orm).await?;
    println!("Schema synchronized");
    Ok(())
}
