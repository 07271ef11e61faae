//! Local axum server standing in for the wellness API in adapter tests.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::collections::HashMap;
use wellness_domain::{AssessmentResult, DisorderRecord, Response, classify};

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Healthy API that scores with the shared rule and knows a few disorders
pub fn wellness_api() -> Router {
    Router::new()
        .route("/api/assessments", post(score))
        .route("/api/disorders/search", get(search))
}

#[derive(Deserialize)]
struct ScoreBody {
    answers: Vec<Response>,
}

async fn score(Json(body): Json<ScoreBody>) -> Json<AssessmentResult> {
    Json(classify(&body.answers))
}

async fn search(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<DisorderRecord>, StatusCode> {
    let name = params
        .get("name")
        .map(|n| n.to_lowercase())
        .ok_or(StatusCode::BAD_REQUEST)?;

    let record = match name.as_str() {
        "depression" => DisorderRecord::new(
            "Depression",
            "A mood disorder causing persistent sadness and loss of interest.",
            vec![
                "Psychotherapy".to_string(),
                "Regular exercise".to_string(),
                "Consistent sleep schedule".to_string(),
            ],
        ),
        "anxiety" => DisorderRecord::new(
            "Anxiety",
            "Excessive worry or fear that interferes with daily activities.",
            vec![
                "Cognitive behavioral therapy".to_string(),
                "Breathing exercises".to_string(),
            ],
        ),
        "social anxiety" => DisorderRecord::new(
            "Social Anxiety Disorder",
            "Intense fear of social situations.",
            vec!["Exposure therapy".to_string()],
        ),
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(record))
}
