use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use persistence::Database;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{categorias, health, root, tareas};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, db: Database) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        db,
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let root_routes = Router::new()
        .route("/", get(root::greeting))
        .route("/dbConexion", get(root::db_conexion));

    let api_routes = Router::new()
        .route(
            "/api/v1/categorias",
            post(categorias::create_categoria).get(categorias::list_categorias),
        )
        .route(
            "/api/v1/categorias/:categoria_id",
            get(categorias::get_categoria)
                .put(categorias::update_categoria)
                .delete(categorias::delete_categoria),
        )
        .route(
            "/api/v1/categorias/:categoria_id/tareas",
            get(categorias::list_categoria_tareas),
        )
        .route(
            "/api/v1/tareas",
            post(tareas::create_tarea).get(tareas::list_tareas),
        )
        .route(
            "/api/v1/tareas/:tarea_id",
            get(tareas::get_tarea)
                .put(tareas::update_tarea)
                .delete(tareas::delete_tarea),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(root_routes)
        .merge(api_routes)
        .merge(public_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
