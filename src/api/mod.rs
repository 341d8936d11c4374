//! Dashboard HTTP Server
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page for the active section
//! - `GET /?section=<id>` - Select a section and render it
//!
//! ## Sections
//! - `GET /api/v1/sections` - List sections
//! - `GET /api/v1/sections/:id` - Layout of a section
//! - `GET /api/v1/view` - Current selection and layout
//! - `PUT /api/v1/view` - Change the selection
//!
//! ## Datasets
//! - `GET /api/v1/datasets` - List datasets
//! - `GET /api/v1/datasets/:name` - Rows of a dataset
//!
//! ## Charts
//! - `GET /api/v1/charts/:section/:index` - SVG of a chart panel
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use aadhaar_insights::api::{serve, AppState};
//! use aadhaar_insights::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let server = config.server.clone();
//!     serve(AppState::new(config), &server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Section routes
        .route("/sections", get(routes::sections::list_sections))
        .route("/sections/:id", get(routes::sections::get_section))
        .route(
            "/view",
            get(routes::sections::get_view).put(routes::sections::select_view),
        )
        // Dataset routes
        .route("/datasets", get(routes::datasets::list_datasets))
        .route("/datasets/:name", get(routes::datasets::get_dataset))
        // Chart routes
        .route("/charts/:section/:index", get(routes::charts::get_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let cors = cors_layer(&state.config.server);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: permissive when no origins are configured
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(origins)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::Section;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn put_view(app: &Router, body: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/view")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_test_app();
        for uri in ["/health/live", "/health/ready", "/health"] {
            assert_eq!(get(&app, uri).await.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_page_defaults_to_overview() {
        let app = create_test_app();
        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(r#"data-section="overview""#));
        assert!(html.contains("Top 10 States by Enrollment"));
    }

    #[tokio::test]
    async fn test_page_query_selects_section() {
        let app = create_test_app();

        let html = body_string(get(&app, "/?section=biometric").await).await;
        assert!(html.contains(r#"data-section="biometric""#));

        // Selection sticks for the next plain request
        let html = body_string(get(&app, "/").await).await;
        assert!(html.contains("Age Distribution: Biometric Updates"));
    }

    #[tokio::test]
    async fn test_page_unknown_section_renders_empty_body() {
        let app = create_test_app();
        get(&app, "/?section=demographic").await;

        let response = get(&app, "/?section=reports").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"data-section="none""#));
        assert!(!html.contains("<svg"));

        // Previous selection is kept
        let html = body_string(get(&app, "/").await).await;
        assert!(html.contains(r#"data-section="demographic""#));
    }

    #[tokio::test]
    async fn test_select_view_then_page() {
        let app = create_test_app();

        let response = put_view(&app, r#"{"section": "biometric"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["section"], "biometric");
        assert_eq!(json["changed"], true);

        let response = put_view(&app, r#"{"section": "comparison"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(get(&app, "/").await).await;
        assert!(html.contains(r#"data-section="comparison""#));
        assert!(html.contains("Key Insights Across Systems"));
        assert!(!html.contains("Enrollment by Day of Week"));
        assert!(!html.contains("Age Distribution: Biometric Updates"));
    }

    #[tokio::test]
    async fn test_select_same_view_twice() {
        let app = create_test_app();
        put_view(&app, r#"{"section": "enrollment"}"#).await;
        let response = put_view(&app, r#"{"section": "enrollment"}"#).await;
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["changed"], false);
    }

    #[tokio::test]
    async fn test_select_unknown_view() {
        let app = create_test_app();
        let response = put_view(&app, r#"{"section": "settings"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(get(&app, "/api/v1/view").await).await).unwrap();
        assert_eq!(json["section"], "overview");
    }

    #[tokio::test]
    async fn test_select_invalid_json() {
        let app = create_test_app();
        let response = put_view(&app, "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_sections() {
        let app = create_test_app();
        let json: serde_json::Value =
            serde_json::from_str(&body_string(get(&app, "/api/v1/sections").await).await).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["sections"][0]["id"], "overview");
        assert_eq!(json["sections"][0]["active"], true);
        assert_eq!(json["sections"][4]["label"], "System Comparison");
    }

    #[tokio::test]
    async fn test_get_section_layout() {
        let app = create_test_app();
        let response = get(&app, "/api/v1/sections/demographic").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["section"], "demographic");
        assert_eq!(json["cards"][2]["value"], "22.9%");
        assert_eq!(
            json["panels"][0]["content"]["chart"]["dataset"],
            "age_distribution_demographic"
        );

        assert_eq!(
            get(&app, "/api/v1/sections/unknown").await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_datasets() {
        let app = create_test_app();
        let json: serde_json::Value =
            serde_json::from_str(&body_string(get(&app, "/api/v1/datasets").await).await).unwrap();
        assert_eq!(json["total"], 7);

        let response = get(&app, "/api/v1/datasets/weekday_enrollment").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["name"], "weekday_enrollment");
        assert_eq!(json["kind"], "weekdays");
        assert_eq!(json["rows"].as_array().unwrap().len(), 7);
        assert_eq!(json["rows"][1]["day"], "Tue");

        assert_eq!(
            get(&app, "/api/v1/datasets/dayOfWeekData").await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_chart_svg() {
        let app = create_test_app();
        let response = get(&app, "/api/v1/charts/comparison/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/svg+xml"
        );
        let svg = body_string(response).await;
        assert!(svg.contains("Duplicate %"));

        // The insights panel is not a chart
        assert_eq!(
            get(&app, "/api/v1/charts/comparison/2").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get(&app, "/api/v1/charts/nowhere/0").await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_configured_default_section() {
        let mut config = Config::default();
        config.dashboard.default_section = Section::Comparison;
        let app = build_router(AppState::new(config));

        let html = body_string(get(&app, "/").await).await;
        assert!(html.contains(r#"data-section="comparison""#));
    }
}
