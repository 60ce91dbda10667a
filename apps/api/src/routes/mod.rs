pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_ats_score;
use crate::geo::handlers::handle_distance;
use crate::resume::handlers::handle_draft_event;
use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list_jobs).post(handlers::handle_upsert_job),
        )
        .route("/api/v1/jobs/search", post(handlers::handle_search))
        .route(
            "/api/v1/jobs/:id",
            get(handlers::handle_get_job).delete(handlers::handle_delete_job),
        )
        .route("/api/v1/geo/distance", post(handle_distance))
        // Resume API
        .route("/api/v1/resumes/ats-score", post(handle_ats_score))
        .route("/api/v1/resumes/draft", post(handle_draft_event))
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

    use crate::board::JobBoard;
    use crate::config::Config;
    use crate::models::job::JobPosting;

    fn seeded_app() -> Router {
        let postings: Vec<JobPosting> = serde_json::from_value(json!([
            {"id": "d1", "title": "Rust Engineer", "company": "Ferrous", "city": "Delhi"},
            {"id": "n1", "title": "Data Analyst", "company": "Numbers", "city": "Noida"},
            {"id": "m1", "title": "Rust Engineer", "company": "Harbor", "city": "Mumbai"}
        ]))
        .unwrap();
        let config = Config::default();
        let board = JobBoard::with_postings(config.default_radius_km, postings);
        build_router(AppState::new(config, board))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(seeded_app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["postings"], 3);
        assert_eq!(body["default_radius_km"], 50.0);
    }

    #[tokio::test]
    async fn test_search_with_reference_filters_by_radius() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({"reference": {"latitude": 28.7041, "longitude": 77.1025}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["radius_km"], 50.0);
        assert_eq!(body["results"][0]["id"], "d1");
        assert_eq!(body["results"][1]["id"], "n1");
    }

    #[tokio::test]
    async fn test_search_without_reference_keeps_all() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({"query": "rust", "radius_km": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert!(body["radius_km"].is_null());
    }

    #[tokio::test]
    async fn test_search_rejects_bad_reference() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({"reference": {"latitude": 123.0, "longitude": 0.0}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_job_crud() {
        let app = seeded_app();

        let (status, created) = send(
            app.clone(),
            "POST",
            "/api/v1/jobs",
            Some(json!({"title": "SRE", "company": "Initech", "city": "Pune"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, fetched) = send(app.clone(), "GET", &format!("/api/v1/jobs/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "SRE");

        let (status, _) = send(app.clone(), "DELETE", &format!("/api/v1/jobs/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app, "GET", &format!("/api/v1/jobs/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upsert_requires_title() {
        let (status, _) = send(
            seeded_app(),
            "POST",
            "/api/v1/jobs",
            Some(json!({"title": "  ", "company": "Initech"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_distance_delhi_mumbai() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/geo/distance",
            Some(json!({
                "from": {"latitude": 28.7041, "longitude": 77.1025},
                "to": {"latitude": 19.0760, "longitude": 72.8777}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let d = body["distance_km"].as_f64().unwrap();
        assert!((1150.0..=1160.0).contains(&d), "Distance was {d}");
        assert_eq!(body["within_radius"], false);
    }

    #[tokio::test]
    async fn test_distance_rejects_negative_radius() {
        let (status, _) = send(
            seeded_app(),
            "POST",
            "/api/v1/geo/distance",
            Some(json!({
                "from": {"latitude": 0.0, "longitude": 0.0},
                "to": {"latitude": 0.0, "longitude": 0.0},
                "radius_km": -5.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ats_score_empty_classic() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/resumes/ats-score",
            Some(json!({"resume": {}, "template": "classic"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 55);
        assert_eq!(body["template"], "classic");
    }

    #[tokio::test]
    async fn test_draft_event_applies() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/resumes/draft",
            Some(json!({
                "state": {"name": "Asha"},
                "event": {"type": "set_summary", "value": "Backend engineer"}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["name"], "Asha");
        assert_eq!(body["state"]["summary"], "Backend engineer");
        // default professional template on an otherwise empty draft
        assert_eq!(body["ats_score"], 55);
    }

    #[tokio::test]
    async fn test_draft_event_scores_with_chosen_template() {
        let (status, body) = send(
            seeded_app(),
            "POST",
            "/api/v1/resumes/draft",
            Some(json!({
                "event": {"type": "add_education"},
                "template": "anti"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["education"].as_array().unwrap().len(), 1);
        assert_eq!(body["ats_score"], 40);
    }
}
