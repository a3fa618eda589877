use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    model::user::{CreateUserParam, Role},
    router,
    state::AppState,
    util::password::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured administrator account if it does not exist yet.
///
/// Accounts created through signup are always `USER`; this is the only way an
/// `ADMIN` account comes into existence.
///
/// # Returns
/// - `Ok(())` - Nothing configured, account already present, or account created
/// - `Err(AppError)` - Hashing or insert failed
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    let user_repo = UserRepository::new(db);
    if user_repo.exists_by_email(&seed.email).await? {
        tracing::debug!("Admin account {} already exists", seed.email);
        return Ok(());
    }

    let admin = user_repo
        .create(CreateUserParam {
            email: seed.email.clone(),
            username: seed.username.clone(),
            password_hash: hash_password(&seed.password)?,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created admin account {} ({})", admin.id, admin.email);
    Ok(())
}

/// Builds the CORS layer.
///
/// With `CORS_ALLOWED_ORIGIN` set, that origin may send credentials (the access token
/// cookie). Without it any origin is allowed but cookies are not shared cross-origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidValue {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

/// Assembles the application: routes, state, cookies and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    router::router()
        .with_state(state)
        .layer(CookieManagerLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
