//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, MongoUserStore, auth_router};
use axum::Router;
use kernel::error::conversions::{fallback, method_not_allowed, panic_response};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::{Client, Database};
use platform::config::Settings;
use platform::password::PasswordService;
use repo::{MongoRepoStore, RepoConfig, repo_router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "codeecho=info,auth=info,repo=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load_from_env()?;

    // Database connection
    let db = connect(&settings).await?;

    let user_store = MongoUserStore::new(&db);
    ensure_user_indexes(&user_store).await;

    let repo_store = MongoRepoStore::new(&db);

    // Argon2 costs are checked here so bad settings fail at startup
    let passwords = PasswordService::new(settings.argon2_params())?;

    let auth_config = AuthConfig::with_timeout(settings.operation_timeout());
    let repo_config = RepoConfig::with_timeout(settings.operation_timeout());

    let app = app(
        auth_router(user_store, passwords, auth_config),
        repo_router(repo_store, repo_config),
    );

    // Start server
    let addr = settings.app_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the MongoDB handle and check the server is reachable
///
/// The driver connects lazily, so a failed ping is only logged.
async fn connect(settings: &Settings) -> anyhow::Result<Database> {
    let options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: settings.mongo_host.clone(),
            port: Some(settings.mongo_port),
        }])
        .app_name("codeecho".to_string())
        .server_selection_timeout(settings.operation_timeout())
        .build();

    let client = Client::with_options(options)?;
    let db = client.database(&settings.mongo_db_name);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => {
            tracing::info!(
                host = %settings.mongo_host,
                port = settings.mongo_port,
                db = %settings.mongo_db_name,
                "Connected to database"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Database ping failed, continuing anyway"
            );
        }
    }

    Ok(db)
}

/// Create the unique user indexes, reporting whether it succeeded
///
/// Errors here should not prevent server startup: registration still checks
/// uniqueness before inserting.
async fn ensure_user_indexes(store: &MongoUserStore) -> bool {
    match store.ensure_indexes().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                error = %e,
                "Creating unique user indexes failed, continuing anyway"
            );
            false
        }
    }
}

/// Mount the feature routers under `/api` with the shared layers
fn app(auth: Router, repo: Router) -> Router {
    Router::new()
        .nest(
            "/api",
            auth.merge(repo)
                .method_not_allowed_fallback(method_not_allowed),
        )
        .fallback(fallback)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
