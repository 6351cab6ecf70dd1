//! REST API endpoints for claim and document analysis

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::ScoreResult;
use crate::service::ClaimAnalysisService;

/// Request body for claim analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeClaimRequest {
    /// Free-form claim description
    pub claim: Option<String>,
}

/// Successful claim analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeClaimResponse {
    /// Model reply, passed through verbatim
    pub analysis: String,
}

/// Request body for document analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeDocumentRequest {
    /// Text extracted from an uploaded document
    pub text: Option<String>,
}

/// Analyze a single claim for fraud indicators
#[utoipa::path(
    post,
    path = "/analyze-claim",
    request_body = AnalyzeClaimRequest,
    responses(
        (status = 200, description = "Claim analyzed", body = AnalyzeClaimResponse),
        (status = 400, description = "Missing claim text"),
        (status = 500, description = "Scoring failed")
    ),
    tag = "analysis"
)]
#[post("/analyze-claim")]
pub async fn analyze_claim(
    service: web::Data<ClaimAnalysisService>,
    body: web::Json<AnalyzeClaimRequest>,
) -> Result<HttpResponse, ApiError> {
    let analysis = service.analyze_claim(body.claim.as_deref()).await?;
    Ok(HttpResponse::Ok().json(AnalyzeClaimResponse { analysis }))
}

/// Score extracted document text for fraud patterns
#[utoipa::path(
    post,
    path = "/analyze-document",
    request_body = AnalyzeDocumentRequest,
    responses(
        (status = 200, description = "Document scored", body = ScoreResult),
        (status = 400, description = "Missing document text"),
        (status = 500, description = "Scoring failed")
    ),
    tag = "analysis"
)]
#[post("/analyze-document")]
pub async fn analyze_document(
    service: web::Data<ClaimAnalysisService>,
    body: web::Json<AnalyzeDocumentRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = service.analyze_document(body.text.as_deref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_claim,
        analyze_document,
        crate::api::health::root,
        crate::api::health::liveness
    ),
    components(schemas(AnalyzeClaimRequest, AnalyzeClaimResponse, AnalyzeDocumentRequest, ScoreResult)),
    tags(
        (name = "analysis", description = "Fraud scoring endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_claim).service(analyze_document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{ScoringBackend, ScoringError};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockBackend {
        reply: Result<&'static str, ()>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ScoringBackend for MockBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, ScoringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(ScoringError::Status {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "upstream detail that must not leak".to_string(),
                }),
            }
        }
    }

    fn service_with(
        reply: Result<&'static str, ()>,
    ) -> (web::Data<ClaimAnalysisService>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = MockBackend {
            reply,
            calls: Arc::clone(&calls),
        };
        let service = web::Data::new(ClaimAnalysisService::new(Arc::new(backend)));
        (service, calls)
    }

    #[actix_web::test]
    async fn missing_claim_returns_400_without_backend_call() {
        let (service, calls) = service_with(Ok("42"));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/analyze-claim")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Claim details are required");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn valid_claim_returns_analysis_verbatim() {
        let (service, calls) = service_with(Ok("42\n"));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/analyze-claim")
            .set_json(serde_json::json!({"claim": "staged collision, no witnesses"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["analysis"], "42\n");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn upstream_failure_returns_generic_500() {
        let (service, _) = service_with(Err(()));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/analyze-claim")
            .set_json(serde_json::json!({"claim": "a claim"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "An error occurred while analyzing the claim");
    }

    #[actix_web::test]
    async fn document_endpoint_returns_lenient_score() {
        let (service, _) = service_with(Ok("72\nSome indicators found."));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/analyze-document")
            .set_json(serde_json::json!({"text": "litigation text"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["score"], 72.0);
        assert_eq!(body["explanation"], "Some indicators found.");
        assert_eq!(body["score_found"], true);
    }

    #[actix_web::test]
    async fn empty_document_returns_400() {
        let (service, calls) = service_with(Ok("0"));
        let app =
            test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/analyze-document")
            .set_json(serde_json::json!({"text": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
