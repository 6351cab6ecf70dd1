//! OpenAPI specification endpoints

use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::claim::ApiDoc;

/// Serve the OpenAPI specification as JSON
#[get("/openapi.json")]
pub async fn spec_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve the OpenAPI specification as YAML
#[get("/openapi.yaml")]
pub async fn spec_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(spec_json).service(spec_yaml);
}
