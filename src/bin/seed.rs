use axum_crud_api::{
    config::AppConfig,
    db::{create_pool, sync_schema},
    state::AppState,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    // Ensure tables exist.
    sync_schema(&AppState::new(pool.clone()).orm).await?;

    let dupont = ensure_user(&pool, "Dupont", "dupont@example.com").await?;
    let martin = ensure_user(&pool, "Martin", "martin@example.com").await?;
    ensure_profile(&pool, dupont, "Enjoys long walks through the catalogue").await?;
    ensure_profile(&pool, martin, "Keeps the books balanced").await?;
    seed_orders(&pool).await?;

    println!("Seed completed. User IDs: {dupont}, {martin}");
    Ok(())
}

async fn ensure_user(pool: &sqlx::PgPool, name: &str, email: &str) -> anyhow::Result<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, created_at, updated_at)
        VALUES ($1, $2, now(), now())
        ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name, updated_at = now()
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email}");
    Ok(id)
}

async fn ensure_profile(pool: &sqlx::PgPool, user_id: i32, bio: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO profiles (bio, avatar_url, user_id, created_at, updated_at)
        VALUES ($1, NULL, $2, now(), now())
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(bio)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Clients, products and orders have no natural key; only seed an empty database.
async fn seed_orders(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let (existing,): (i64,) = sqlx::query_as("SELECT count(*) FROM clients")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("Clients already present, skipping orders");
        return Ok(());
    }

    let clients = [("Durand", "Alice"), ("Lefebvre", "Bruno")];
    let products = [
        ("Ferris Mug", Decimal::new(1200, 2)),
        ("Rust Sticker Pack", Decimal::new(500, 2)),
        ("Async Rust Handbook", Decimal::new(3499, 2)),
    ];

    let mut client_ids = Vec::with_capacity(clients.len());
    for (name, first_name) in clients {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO clients (name, first_name, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(first_name)
        .fetch_one(pool)
        .await?;
        client_ids.push(id);
    }

    let mut product_ids = Vec::with_capacity(products.len());
    for (name, price) in products {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO products (name, price, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await?;
        product_ids.push(id);
    }

    for (i, client_id) in client_ids.iter().enumerate() {
        for (j, product_id) in product_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO orders (client_id, product_id, quantity, status, is_returned, created_at)
                VALUES ($1, $2, $3, $4, false, now())
                "#,
            )
            .bind(client_id)
            .bind(product_id)
            .bind((i + j + 1) as i32)
            .bind(j % 2 == 0)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded clients, products and orders");
    Ok(())
}
