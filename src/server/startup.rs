use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer from configuration.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the configured origin, or any origin when unset
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = match &config.cors_allowed_origin {
        Some(origin) => {
            let value =
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                })?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
