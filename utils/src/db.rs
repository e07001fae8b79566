use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{DatabaseConnection, DbErr};

pub async fn migrate(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let schema_manager = SchemaManager::new(conn);
    Migrator::up(conn, None).await?;

    for table in ["users", "matches"] {
        if !schema_manager.has_table(table).await? {
            return Err(DbErr::Migration(format!("table `{table}` missing after migration")));
        }
    }
    tracing::debug!("database schema is up to date");
    Ok(())
}
