//! HTTP REST API routes

mod region_routes;
mod section_routes;
mod subculture_routes;
mod world_routes;

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Whole notebook
        .route("/api/world", get(world_routes::get_world))
        .route("/api/schema", get(world_routes::get_schema))
        .route("/api/summary", get(world_routes::get_summary))
        // Fixed sections
        .route("/api/sections/{section}", get(section_routes::get_section))
        .route(
            "/api/sections/{section}/{field}",
            put(section_routes::set_section_field),
        )
        // Regions
        .route(
            "/api/regions",
            get(region_routes::list_regions).post(region_routes::generate_region),
        )
        .route(
            "/api/regions/{id}",
            get(region_routes::get_region)
                .patch(region_routes::update_region)
                .delete(region_routes::delete_region),
        )
        // Subcultures
        .route(
            "/api/subcultures",
            get(subculture_routes::list_subcultures).post(subculture_routes::generate_subculture),
        )
        .route(
            "/api/subcultures/{id}",
            get(subculture_routes::get_subculture)
                .patch(subculture_routes::update_subculture)
                .delete(subculture_routes::delete_subculture),
        )
}

/// Full application router with health check, CORS and request tracing
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    fn app() -> Router {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            rng_seed: Some(1234),
        };
        router(Arc::new(AppState::new(config)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("OK"));
    }

    #[tokio::test]
    async fn test_set_and_get_section_field() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/sections/empire/name",
            Some(json!({ "value": "Roma Nova" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Roma Nova");

        let (status, body) = send(&app, Method::GET, "/api/sections/empire", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "name": "Roma Nova",
                "government": "",
                "capital": "",
                "population": "",
                "notes": ""
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_section_and_field() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/sections/atlantis", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/sections/empire/motto",
            Some(json!({ "value": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/api/world", None).await;
        assert_eq!(body["sections"]["empire"]["name"], "");
    }

    #[tokio::test]
    async fn test_region_lifecycle() {
        let app = app();

        let mut ids = Vec::new();
        for _ in 0..3 {
            let (status, body) = send(&app, Method::POST, "/api/regions", None).await;
            assert_eq!(status, StatusCode::CREATED);
            ids.push(body["id"].as_u64().unwrap());
        }

        let uri = format!("/api/regions/{}", ids[1]);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let uri = format!("/api/regions/{}", ids[0]);
        let (status, _) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "field": "notes", "value": "Border march" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, "/api/regions", None).await;
        let regions = body.as_array().unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0]["id"].as_u64(), Some(ids[0]));
        assert_eq!(regions[0]["notes"], "Border march");
        assert_eq!(regions[1]["id"].as_u64(), Some(ids[2]));
        assert_eq!(regions[1]["name"], "Region 3");
    }

    #[tokio::test]
    async fn test_record_edits_never_fail() {
        let app = app();
        let (_, culture) = send(&app, Method::POST, "/api/subcultures", None).await;
        let uri = format!("/api/subcultures/{}", culture["id"]);

        let (status, _) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "field": "tension", "value": "None" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/subcultures/999",
            Some(json!({ "field": "name", "value": "Ghosts" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body, culture);

        let (status, _) = send(&app, Method::GET, "/api/subcultures/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary() {
        let app = app();

        let (_, body) = send(&app, Method::GET, "/api/summary", None).await;
        assert_eq!(
            body,
            json!({ "regionCount": 0, "subcultureCount": 0, "avgLoyalty": 0, "avgIntegration": 0 })
        );

        let (_, region) = send(&app, Method::POST, "/api/regions", None).await;
        let (_, body) = send(&app, Method::GET, "/api/summary", None).await;
        assert_eq!(body["regionCount"], 1);
        assert_eq!(body["avgLoyalty"], region["loyalty"]);
    }

    #[tokio::test]
    async fn test_schema_lists_every_section() {
        let (status, body) = send(&app(), Method::GET, "/api/schema", None).await;
        assert_eq!(status, StatusCode::OK);

        let keys: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["key"].as_str().unwrap())
            .collect();
        assert_eq!(
            keys,
            ["empire", "hiddenIsland", "magicSystem", "conflict", "timeline"]
        );
        assert_eq!(body[1]["fields"][2]["key"], "crystalMagic");
    }
}
