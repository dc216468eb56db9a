#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database per test with all migrations applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_product(db: &DatabaseConnection, name: &str) -> Result<models::product::Model, anyhow::Error> {
    let p = models::product::create(
        db,
        models::product::NewProduct { name: name.into(), description: "seed".into(), price: 10, id_user: 1 },
    )
    .await?;
    Ok(p)
}
