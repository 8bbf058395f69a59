use axum::{http::StatusCode, routing::post, Json, Router};
use gitnotify_core::{EventContext, NotifyError};
use gitnotify_format::render_message;
use serde_json::{json, Value};
use tracing::warn;

use crate::RenderRequest;

pub fn routes() -> Router {
    Router::new()
        .route("/api/render", post(render))
        .route("/api/render/message", post(render_event_message))
}

async fn render(body: String) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = RenderRequest::from_json(&body).map_err(to_error)?;
    Ok(Json(json!(request.render())))
}

async fn render_event_message(body: String) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let event = EventContext::from_json(&body).map_err(to_error)?;
    Ok(Json(json!({ "content": render_message(&event) })))
}

fn to_error(e: NotifyError) -> (StatusCode, Json<Value>) {
    warn!("rejected event: {e}");
    let status = match &e {
        NotifyError::InvalidInput(_) | NotifyError::MissingSha { .. } => {
            StatusCode::BAD_REQUEST
        }
        NotifyError::Json(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(json!({ "error": e.to_string() })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::build_router;
    use crate::test_helpers::{post_json, post_raw};

    #[tokio::test]
    async fn render_returns_topic_and_content() {
        let body = json!({
            "topic": {
                "kind": "pull_request_or_issue",
                "repo": "gitnotify",
                "issue_kind": "pull_request",
                "number": 42,
                "title": "Add tags"
            },
            "event": {
                "kind": "pull_request",
                "user_name": "alice",
                "action": "opened",
                "url": "url",
                "number": 42,
                "assignees": ["bob", "carol"]
            }
        });
        let (status, v) = post_json(build_router(), "/api/render", &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["topic"], "gitnotify / PR #42 Add tags");
        assert_eq!(
            v["content"],
            "alice opened [PR #42](url) (assigned to bob and carol)."
        );
    }

    #[tokio::test]
    async fn render_message_only() {
        let body = json!({
            "kind": "tag",
            "user_name": "alice",
            "tag_name": "v1.0"
        });
        let (status, v) = post_json(build_router(), "/api/render/message", &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["content"], "alice pushed tag v1.0.");
    }

    #[tokio::test]
    async fn invalid_event_is_bad_request() {
        let body = json!({
            "kind": "push",
            "user_name": "alice",
            "branch_name": "main",
            "commits": [{"sha": "", "message": "m", "author_name": "alice"}]
        });
        let (status, v) = post_json(build_router(), "/api/render/message", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "commit at position 0 has no sha");
    }

    #[tokio::test]
    async fn full_render_rejects_invalid_event() {
        let body = json!({
            "topic": { "kind": "branch", "repo": "gitnotify", "branch": "main" },
            "event": {
                "kind": "force_push",
                "user_name": "alice",
                "url": "url",
                "branch_name": "main",
                "head": ""
            }
        });
        let (status, v) = post_json(build_router(), "/api/render", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "invalid input: force push without a head commit");
    }

    #[tokio::test]
    async fn malformed_json_is_unprocessable() {
        for uri in ["/api/render", "/api/render/message"] {
            let (status, v) = post_raw(build_router(), uri, "{not json").await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            assert!(v["error"]
                .as_str()
                .unwrap()
                .starts_with("malformed event:"));
        }
    }

    #[tokio::test]
    async fn unknown_kind_is_unprocessable() {
        let body = json!({ "kind": "wiki_edit", "user_name": "alice" });
        let (status, v) = post_json(build_router(), "/api/render/message", &body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(v["error"].is_string());
    }
}
