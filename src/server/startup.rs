use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, StoreKind},
    data::{memory::InMemoryCityInfoStore, StoreProvider},
    error::{config::ConfigError, AppError},
    service::{auth::TokenService, file::FileService, mail::default_mail_service},
    state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database, then automatically runs all
/// pending SeaORM migrations, including the demo city seed, to ensure the database schema
/// is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `database_url` - SeaORM connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the store provider for the configured backend.
pub async fn build_store_provider(config: &Config) -> Result<StoreProvider, AppError> {
    match config.store {
        StoreKind::InMemory => {
            tracing::info!("Using in-memory city info store");
            Ok(StoreProvider::InMemory(Arc::new(
                InMemoryCityInfoStore::seeded(),
            )))
        }
        StoreKind::Database => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            tracing::info!("Using database city info store");
            Ok(StoreProvider::Database(
                connect_to_database(database_url).await?,
            ))
        }
    }
}

/// Initializes every shared dependency from configuration.
pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    Ok(AppState::new(
        build_store_provider(config).await?,
        TokenService::from_config(&config.auth),
        default_mail_service(&config.mail),
        FileService::from_config(&config.files),
    ))
}
