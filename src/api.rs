//! Liveness endpoint served while tracking.
//!
//! Spawned as a background task next to the poll loop; shares no state with it.

use crate::i18n;
use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use tracing::{error, info};

/// Shared state for API handlers.
#[derive(Clone)]
struct ApiState {
    banner: Arc<str>,
}

/// `GET /`: short liveness text.
async fn root(State(state): State<ApiState>) -> String {
    state.banner.to_string()
}

/// `GET /health`: plain `OK`.
async fn health() -> &'static str {
    "OK"
}

/// Build the router. `name` and `lang` shape the liveness text.
pub fn build_router(name: &str, lang: &str) -> Router {
    let state = ApiState {
        banner: Arc::from(i18n::service_running(lang, name)),
    };
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve on `0.0.0.0:{port}` until the process exits. Bind failure is logged.
pub async fn serve(port: u16, name: String, lang: String) {
    let app = build_router(&name, &lang);
    let addr = format!("0.0.0.0:{port}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("health server failed to bind to {addr}: {e}");
            return;
        }
    };

    info!("health server listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("health server error: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let app = build_router("Hearth", "en");
        let req = Request::get("/").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "Hearth is running ✅");
    }

    #[tokio::test]
    async fn test_health_ok() {
        let app = build_router("Hearth", "ru");
        let req = Request::get("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "OK");
    }

    #[tokio::test]
    async fn test_unknown_path_404() {
        let app = build_router("Hearth", "ru");
        let req = Request::get("/api/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
