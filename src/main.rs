//! Todo service main application
//!
//! Boots the actix-web HTTP server, connects to MongoDB, and wires the
//! store handle into the request handlers. The connection is established
//! once here and injected via `web::Data`; nothing else in the process
//! holds database state.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use todo_service_backend::config::ServerConfig;
use todo_service_backend::db::Database;
use todo_service_backend::repositories::todos::todo_repository::{
    MongoTodoRepository, TodoStore,
};
use todo_service_backend::routes::{configure_all_routes, default_json_config};
use todo_service_backend::services::todos::todo_service::TodoService;

/// Rate limiting settings
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 starting todo service...");

    // data store initialization; the handle is injected, never global
    let database = initialize_data_store().await;
    let store: Arc<dyn TodoStore> = Arc::new(MongoTodoRepository::new(database));
    let todo_service = web::Data::new(TodoService::new(store));

    start_http_server(todo_service).await
}

/// Configures and runs the HTTP server
///
/// Applies rate limiting, CORS, request logging, and path normalization,
/// then registers the API routes with the injected todo service.
///
/// # Errors
///
/// * `std::io::Error` - port binding failure or server runtime error
async fn start_http_server(todo_service: web::Data<TodoService>) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 server running at http://{}:{}", host, port);
    info!("📍 health check: http://{}:{}/health", host, port);
    info!("📍 API endpoint: http://{}:{}/todos", host, port);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ rate limiting enabled: {} req/s, burst {}",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(todo_service.clone())
            .app_data(default_json_config())
            .configure(configure_all_routes)
    })
    .bind((host, port))?
    .workers(4)
    .run()
    .await
}

/// Loads the profile-specific environment file
///
/// # Environment Variables
///
/// * `PROFILE=dev` - loads `.env.dev` (default)
/// * `PROFILE=prod` - loads `.env.prod`
/// * anything else - loads the plain `.env` file
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod loaded"),
            Err(e) => error!("failed to load .env.prod: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev loaded"),
            Err(e) => error!("failed to load .env.dev: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("default .env loaded");
        }
    }
}

/// Initializes logging from `RUST_LOG`
///
/// Defaults to info level with actix_web at debug.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// Connects to MongoDB
///
/// # Panics
///
/// * when the connection cannot be established; the service is useless
///   without its store, so startup aborts
async fn initialize_data_store() -> Arc<Database> {
    info!("📡 connecting to database...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("failed to connect to MongoDB"),
    );

    info!("✅ data store ready");

    database
}

/// Configures CORS for browser clients
///
/// Allows the local development origins; adjust for deployment.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .max_age(3600)
}

/// Loads rate limiting settings from the environment
///
/// # Environment Variables
///
/// * `RATE_LIMIT_PER_SECOND` - allowed requests per second (default: 100)
/// * `RATE_LIMIT_BURST_SIZE` - allowed burst (default: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("failed to parse RATE_LIMIT_PER_SECOND: {}. using 100", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("failed to parse RATE_LIMIT_BURST_SIZE: {}. using 200", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("rate limit config loaded: {:?}", config);
    config
}
