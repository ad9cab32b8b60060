// src/db.rs
use sea_orm::{Database, DatabaseConnection, DbErr};

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(database_url: &str) -> Result<DbPool, DbErr> {
    Database::connect(database_url).await
}
