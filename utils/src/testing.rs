use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::db::migrate;

/// Fresh in-memory sqlite database with the schema applied. A single pooled
/// connection keeps every query on the same memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let conn = Database::connect(options).await?;
    migrate(&conn).await?;
    Ok(conn)
}
