//! # API REST
//!
//! REST API implementation for rx.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, running blocking core calls)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{convert::prescription_items, pb, HealthService};
use rx_core::{DrugId, InteractionService};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub service: InteractionService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, analyze, validate_prescription, demo_intro, demo_features),
    components(schemas(
        pb::HealthRes,
        pb::PairVerdict,
        pb::PrescriptionItem,
        pb::SummarizePrescriptionReq,
        pb::SummarizePrescriptionRes,
    ))
)]
pub struct ApiDoc;

/// Query parameters of `GET /interactions/analyze`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct AnalyzeParams {
    /// Id of the first drug
    pub drug_a: i64,
    /// Id of the second drug
    pub drug_b: i64,
}

/// Builds the REST router with OpenAPI docs under `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interactions/analyze", get(analyze))
        .route("/prescriptions/validate", post(validate_prescription))
        .route("/demo/intro", get(demo_intro))
        .route("/demo/features", get(demo_features))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/interactions/analyze",
    params(AnalyzeParams),
    responses(
        (status = 200, description = "Risk verdict for the drug pair", body = pb::PairVerdict),
        (status = 400, description = "Missing or malformed drug ids"),
        (status = 500, description = "Internal server error")
    )
)]
/// Assess the interaction risk of two drugs
///
/// Always answers with a verdict. If either drug cannot be fetched from the drug store the
/// verdict is the degraded one (`MODERATE`, score 10, `UNKNOWN` for the missing side).
///
/// # Errors
/// Returns `500 Internal Server Error` if the assessment task panicked.
#[axum::debug_handler]
async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<pb::PairVerdict>, (StatusCode, &'static str)> {
    let service = state.service.clone();
    let (drug_a, drug_b) = (DrugId(params.drug_a), DrugId(params.drug_b));

    match tokio::task::spawn_blocking(move || service.assess_pair(drug_a, drug_b)).await {
        Ok(verdict) => Ok(Json(verdict.into())),
        Err(e) => {
            tracing::error!("Assess pair error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/prescriptions/validate",
    request_body = pb::SummarizePrescriptionReq,
    responses(
        (status = 200, description = "Interaction summary", body = pb::SummarizePrescriptionRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Compute the interaction summary of a prescription without storing it
///
/// Every unordered pair of items is assessed, one line per pair in item order.
///
/// # Errors
/// Returns `500 Internal Server Error` if the summary task panicked.
#[axum::debug_handler]
async fn validate_prescription(
    State(state): State<AppState>,
    Json(req): Json<pb::SummarizePrescriptionReq>,
) -> Result<Json<pb::SummarizePrescriptionRes>, (StatusCode, &'static str)> {
    let service = state.service.clone();
    let items = prescription_items(req);

    match tokio::task::spawn_blocking(move || service.summarize_prescription(&items)).await {
        Ok(summary) => Ok(Json(pb::SummarizePrescriptionRes { summary })),
        Err(e) => {
            tracing::error!("Summarize prescription error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/demo/intro",
    responses((status = 200, description = "Service introduction", body = String))
)]
async fn demo_intro() -> &'static str {
    "Interaction Service: demo endpoints available at /interactions/analyze"
}

#[utoipa::path(
    get,
    path = "/demo/features",
    responses((status = 200, description = "Feature list", body = String))
)]
async fn demo_features() -> &'static str {
    "Features: rule engine, side-effect overlap, category conflict, combined dosage checks, severity scoring."
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            service: InteractionService::with_seeded_catalog(),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_ok() {
        let req = Request::get("/health").body(Body::empty()).unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn analyze_returns_camel_case_verdict() {
        let req = Request::get("/interactions/analyze?drugA=3&drugB=9")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["drugA"], "Amoxicillin");
        assert_eq!(json["drugB"], "Ciprofloxacin");
        assert_eq!(json["riskLevel"], "HIGH");
        assert_eq!(json["severityScore"], 70);
    }

    #[tokio::test]
    async fn analyze_unknown_drug_degrades() {
        let req = Request::get("/interactions/analyze?drugA=1&drugB=404")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["drugA"], "Paracetamol");
        assert_eq!(json["drugB"], "UNKNOWN");
        assert_eq!(json["riskLevel"], "MODERATE");
        assert_eq!(json["severityScore"], 10);
    }

    #[tokio::test]
    async fn analyze_without_ids_is_bad_request() {
        let req = Request::get("/interactions/analyze?drugA=1")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validate_prescription_lists_every_pair() {
        let req = Request::post("/prescriptions/validate")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"items":[{"drugId":1,"doseMg":500},{"drugId":2,"doseMg":400},{"drugId":8,"doseMg":300}]}"#,
            ))
            .unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let summary = json["summary"].as_str().unwrap();
        let heads: Vec<&str> = summary
            .split('\n')
            .filter(|l| l.contains(" <-> "))
            .map(|l| l.split(" => ").next().unwrap())
            .collect();
        assert_eq!(
            heads,
            vec![
                "Paracetamol <-> Ibuprofen",
                "Paracetamol <-> Aspirin",
                "Ibuprofen <-> Aspirin"
            ]
        );
    }

    #[tokio::test]
    async fn validate_single_item_returns_sentinel() {
        let req = Request::post("/prescriptions/validate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"items":[{"drugId":1}]}"#))
            .unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(
            body_json(response).await["summary"],
            "no interactions (fewer than two drugs)"
        );
    }

    #[tokio::test]
    async fn demo_intro_is_plain_text() {
        let req = Request::get("/demo/intro").body(Body::empty()).unwrap();

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("/interactions/analyze"));
    }
}
