use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use sqlx::postgres::PgPoolOptions;
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// 声明子模块
mod config;
mod error;
mod models;
mod handlers;
mod services;

use config::AppConfig;
use services::check_store::{CheckStore, MemoryCheckStore, PgCheckStore};

// 定义全局状态，Handler 通过它访问检查记录存储
pub struct AppState {
    pub store: Arc<dyn CheckStore>,
}

#[tokio::main]
async fn main() {
    // 1. 初始化日志系统
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. 加载 .env 环境变量
    dotenv().ok();
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("配置错误: {}", e);
            std::process::exit(1);
        }
    };

    // 3. 初始化存储：配置了 DATABASE_URL 用 PostgreSQL，否则用内存存储
    let store: Arc<dyn CheckStore> = match &config.database_url {
        Some(database_url) => match connect_postgres(database_url, config.db_max_connections).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!("Failed to initialise database: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("DATABASE_URL 未设置，使用内存存储 (重启后数据丢失)");
            Arc::new(MemoryCheckStore::new())
        }
    };

    let shared_state = Arc::new(AppState { store });

    // 4. 配置跨域 (CORS) - 前端页面单独部署
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 5. 构建路由
    let app = Router::new()
        // 变位词检查
        .route("/api/checks", post(handlers::check_handler::create_check)
            .get(handlers::history_handler::list_checks))
        .route("/api/checks/:id", delete(handlers::history_handler::delete_check))
        .route("/api/examples", get(handlers::check_handler::list_examples))
        .route("/health", get(|| async { "ok" }))

        // 中间件：日志记录和跨域
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state);

    // 6. 启动服务
    let addr = config.server_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("🚀 Server started at http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

async fn connect_postgres(database_url: &str, max_connections: u32) -> Result<PgCheckStore, error::StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    let store = PgCheckStore::new(pool);
    store.ensure_schema().await?;
    tracing::info!("PostgreSQL 已连接，anagram_checks 表就绪");
    Ok(store)
}
