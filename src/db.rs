use anyhow::Result;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, Schema, Statement,
    sea_query::TableCreateStatement,
};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::entity::{Clients, Orders, Products, Profiles, Users};

pub type DbPool = PgPool;
pub type OrmConn = DatabaseConnection;

/// Create the Postgres pool shared by sqlx queries and SeaORM.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// CREATE TABLE statements for every entity, referenced tables first.
pub fn schema_statements(backend: DbBackend) -> Vec<Statement> {
    let schema = Schema::new(backend);
    let tables = vec![
        create_table(&schema, Users),
        create_table(&schema, Profiles),
        create_table(&schema, Clients),
        create_table(&schema, Products),
        create_table(&schema, Orders),
    ];
    tables.iter().map(|table| backend.build(table)).collect()
}

fn create_table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    table
}

/// Reconcile the database with the declared entities. Existing tables are left as they are.
pub async fn sync_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    for statement in schema_statements(backend) {
        conn.execute(statement).await?;
    }
    tracing::info!("database schema synchronized");
    Ok(())
}
