//! Request handler for the web demo
//!
//! | Route | |
//! |---|---|
//! | `GET /` | Form page |
//! | `POST /` | Classify the `review` form field and render the label |
//! | `POST /api/sentiment` | JSON `{"review": ...}` → full analysis |
//! | `GET /healthz` | Liveness |

mod handlers;
mod page;

pub use handlers::{ReviewForm, ReviewRequest};
pub use page::render_page;

use crate::error::{Error, Result};
use crate::pipeline::ReviewPipeline;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<ReviewPipeline>,
}

impl AppState {
    pub fn new(pipeline: ReviewPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index_handler).post(handlers::submit_handler),
        )
        .route("/api/sentiment", post(handlers::api_sentiment_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .with_state(state)
}

/// Serve the demo until SIGINT/SIGTERM
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("review-sentiment listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        let pipeline = ReviewPipeline::load(&AppConfig::default()).unwrap();
        build_router(AppState::new(pipeline))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Sentiment Analyzer for Reviews"));
        assert!(html.contains("<h3></h3>"));
    }

    #[tokio::test]
    async fn test_submit_positive_review() {
        let response = router()
            .oneshot(form_post("review=I+love+this+product"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("<h3>positive</h3>"));
    }

    #[tokio::test]
    async fn test_submit_negative_review() {
        let response = router()
            .oneshot(form_post("review=I+hate+this+product"))
            .await
            .unwrap();

        assert!(body_string(response).await.contains("<h3>negative</h3>"));
    }

    #[tokio::test]
    async fn test_submit_without_field_is_bad_request() {
        let response = router().oneshot(form_post("other=1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_json_endpoint() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/sentiment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"review": "This is not good"}"#))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["normalized"], "this is not neg_good");
        assert_eq!(json["marked"], serde_json::json!([3]));
        assert!(json["label"].is_string());
    }

    #[tokio::test]
    async fn test_healthz() {
        let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}
