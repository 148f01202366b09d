use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    app_state::AppState,
    middleware::tracing::observability_middleware,
    modules::{
        dashboard::routes::dashboard_routes,
        lookups::routes::{jamaat_routes, region_routes},
        participants::handlers::classify_preview,
        participants::routes::participant_routes,
        settings::routes::event_settings_routes,
    },
};

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/classify", get(classify_preview))
        .nest("/participants", participant_routes())
        .nest("/regions", region_routes())
        .nest("/jamaats", jamaat_routes())
        .nest("/event-settings", event_settings_routes())
        .nest("/dashboard", dashboard_routes());

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

/// CORS for the external web UI. Without a configured origin anything is
/// allowed, which is only acceptable in development.
fn cors_layer(state: &AppState) -> CorsLayer {
    match state.env.app.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(
                origin.parse().expect("CORS_ORIGIN must be a valid header value"),
            ))
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

async fn hello() -> &'static str {
    "Ijtemaa Backend says hello!\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    let telemetry_health = crate::telemetry::telemetry_health_check();

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
            "telemetry": telemetry_health
        }
    }))
}
