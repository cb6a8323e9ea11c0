//! HTTP routes.
//!
//! The only application route is the liveness probe. Unmatched paths and
//! methods fall through to axum's default 404 and 405 responses.
//!
//! Request tracing is enabled via middleware that assigns a request ID to
//! each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health route and request ID middleware.
pub fn create_router(state: AppState) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::{DateTime, NaiveDateTime};
    use tower::ServiceExt;

    use crate::health::{TimestampFormat, LOCAL_TIMESTAMP_FORMAT};

    fn app(timestamp_format: TimestampFormat) -> Router {
        create_router(AppState { timestamp_format })
    }

    async fn send(app: Router, method: Method, uri: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_healthy_json() {
        let response = send(app(TimestampFormat::Local), Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

        let json = json_body(response).await;
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["status"], "healthy");

        let timestamp = object["timestamp"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, LOCAL_TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn test_health_renders_utc_when_configured() {
        let response = send(app(TimestampFormat::Utc), Method::GET, "/health").await;
        let json = json_body(response).await;

        let timestamp = json["timestamp"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[tokio::test]
    async fn test_health_ignores_query_and_headers() {
        let response = app(TimestampFormat::Local)
            .oneshot(
                Request::builder()
                    .uri("/health?verbose=true")
                    .header(header::ACCEPT, "text/plain")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_post_health_is_method_not_allowed() {
        let response = send(app(TimestampFormat::Local), Method::POST, "/health").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let allow = response.headers()[header::ALLOW].to_str().unwrap();
        assert!(allow.contains("GET"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = send(app(TimestampFormat::Local), Method::GET, "/healthz").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
