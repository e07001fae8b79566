use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use app::config::Config;
use app::state::AppState;

use crate::openapi::ApiDoc;
use crate::routers::create_router;

pub fn setup_router(config: Config, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .context("ALLOWED_ORIGIN is not a valid header value")?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(origin)
        .allow_credentials(true);

    let router = create_router(AppState { conn, config })
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

pub fn setup_config() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub async fn setup_db(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.db_url);
    opt.max_lifetime(std::time::Duration::from_secs(60))
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    tracing::info!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}
