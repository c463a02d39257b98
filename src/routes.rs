// src/routes.rs

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers::{leaderboard, questions},
    models::{
        leaderboard::{LeaderboardEntry, SubmitScoreRequest},
        question::{Difficulty, Question},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        questions::get_questions,
        leaderboard::get_leaderboard,
        leaderboard::submit_score,
    ),
    components(schemas(Question, Difficulty, LeaderboardEntry, SubmitScoreRequest, ErrorBody))
)]
pub struct ApiDoc;

/// Builds the CORS layer. No configured origins means any origin may call.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Assembles the main application router.
///
/// * Mounts the question and leaderboard routes under `/api`.
/// * Serves the OpenAPI document at `/api/openapi.json`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/questions/{difficulty}", get(questions::get_questions))
        .route(
            "/leaderboard",
            get(leaderboard::get_leaderboard).post(leaderboard::submit_score),
        )
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    Router::new()
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Config, store::MemoryStore};

    fn app() -> Router {
        create_router(AppState {
            store: Arc::new(MemoryStore::new()),
            config: Config::default(),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn questions_route_is_mounted_under_api() {
        let response = app()
            .oneshot(Request::get("/api/questions/easy").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(3));

        let response = app()
            .oneshot(Request::get("/questions/easy").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn body_without_json_content_type_is_bad_request() {
        let response = app()
            .oneshot(
                Request::post("/api/leaderboard")
                    .body(Body::from(r#"{"username":"dave","score":3,"total":5,"difficulty":"easy"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn configured_origins_are_echoed() {
        let app = create_router(AppState {
            store: Arc::new(MemoryStore::new()),
            config: Config {
                cors_origins: vec!["http://localhost:5173".to_string()],
                ..Config::default()
            },
        });

        let response = app
            .oneshot(
                Request::get("/api/leaderboard")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }
}
