pub mod health;
pub mod layout;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/layout", post(layout::handle_layout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::layout::StylePreset;

    fn app() -> Router {
        app_with_preset(StylePreset::Classic)
    }

    fn app_with_preset(preset: StylePreset) -> Router {
        build_router(AppState::new(Config {
            port: 0,
            rust_log: "info".to_string(),
            preset,
            font: None,
        }))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_layout_returns_pages_and_fill() {
        let (status, body) = post_json(
            app(),
            "/api/v1/layout",
            json!({
                "resume": {
                    "basics": { "name": "Ada Lovelace", "email": "ada@example.com" },
                    "work": [{
                        "name": "Analytical Engines Ltd",
                        "position": "Engineer",
                        "startDate": "1842-01",
                        "highlights": ["Wrote the first published algorithm"]
                    }]
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{body}");
        let pages = body["pages"].as_array().unwrap();
        assert_eq!(pages.len(), 1);
        let texts: Vec<&str> = pages[0]["instructions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["text"].as_str())
            .collect();
        assert!(texts.contains(&"Ada Lovelace"));
        assert!(texts.contains(&"Jan 1842 – Present"));
        assert!(texts.contains(&"Wrote the first published algorithm"));
        assert_eq!(body["fill"][0]["overflowed"], false);
    }

    #[tokio::test]
    async fn test_partial_style_overrides_named_fields() {
        let (status, body) = post_json(
            app(),
            "/api/v1/layout",
            json!({
                "resume": { "basics": { "name": "Ada" } },
                "style": { "page_width": 150.0 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["pages"][0]["width"], 150.0);
        assert_eq!(body["pages"][0]["height"], 297.0);
    }

    #[tokio::test]
    async fn test_partial_style_keeps_configured_preset() {
        let (status, body) = post_json(
            app_with_preset(StylePreset::Compact),
            "/api/v1/layout",
            json!({
                "resume": { "skills": [{ "name": "Tools", "keywords": ["git"] }] },
                "style": { "font": "times" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let title = &body["pages"][0]["instructions"][0];
        assert_eq!(title["text"], "SKILLS");
        assert_eq!(title["y"], 15.0);
        assert_eq!(title["font_size"], 10.5);
    }

    #[tokio::test]
    async fn test_malformed_style_is_bad_request() {
        let (status, body) = post_json(
            app(),
            "/api/v1/layout",
            json!({
                "resume": {},
                "style": { "font": 42 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_negative_spacing_is_unprocessable() {
        let (status, body) = post_json(
            app(),
            "/api/v1/layout",
            json!({
                "resume": { "basics": { "name": "Ada" } },
                "style": { "spacing": { "after_bullet": -10.0 } }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_LAYOUT");
    }

    #[tokio::test]
    async fn test_invalid_style_is_unprocessable() {
        let (status, body) = post_json(
            app(),
            "/api/v1/layout",
            json!({
                "resume": { "basics": { "name": "Ada" } },
                "style": { "page_width": 30.0 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_LAYOUT");
    }
}
