use crate::models::ReviewAnalysis;
use crate::web::page::render_page;
use crate::web::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::Deserialize;
use std::time::Instant;
use tracing::{info, warn};

/// Body of the review form
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub review: Option<String>,
}

/// Body of the JSON endpoint
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub review: String,
}

pub(crate) async fn index_handler() -> Html<String> {
    Html(render_page(None, None))
}

pub(crate) async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ReviewForm>,
) -> impl IntoResponse {
    let Some(review) = form.review else {
        warn!("Review form submitted without a `review` field");
        return (
            StatusCode::BAD_REQUEST,
            Html(render_page(None, Some("Please enter a review before submitting."))),
        );
    };

    let started = Instant::now();
    let label = state.pipeline.classify_review(&review);
    info!(
        label = %label,
        chars = review.chars().count(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Classified review"
    );

    (StatusCode::OK, Html(render_page(Some(label), None)))
}

pub(crate) async fn api_sentiment_handler(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Json<ReviewAnalysis> {
    let analysis = state.pipeline.analyze(&request.review);
    info!(
        label = %analysis.label,
        compound = analysis.scores.compound,
        marked = analysis.marked.len(),
        "Analyzed review"
    );
    Json(analysis)
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}
