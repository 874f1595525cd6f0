use actix_web::{post, web, Responder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::studio::domain::preview::{item_previews, preview, ItemPreview, Preview};
use crate::modules::studio::domain::validation::{validate_document, ValidationIssue};
use crate::modules::studio::domain::StudioError;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub preview: Preview,
    pub item_previews: Vec<ItemPreview>,
}

/// Validates a draft document without storing it.
#[utoipa::path(
    post,
    path = "/api/studio/validate/{doc_type}",
    tag = "studio",
    params(
        ("doc_type" = String, Path, description = "Document type name: about, cv or project")
    ),
    responses(
        (status = 200, description = "Rule violations and list preview", body = inline(SuccessResponse<ValidationReport>)),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Unknown document type", body = ErrorResponse),
    )
)]
#[post("/api/studio/validate/{doc_type}")]
pub async fn validate_document_handler(
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> impl Responder {
    let doc_type = path.into_inner();
    let doc = payload.into_inner();

    let report = validate_document(&doc_type, &doc).and_then(|issues| {
        Ok(ValidationReport {
            valid: issues.is_empty(),
            issues,
            preview: preview(&doc_type, &doc)?,
            item_previews: item_previews(&doc_type, &doc),
        })
    });

    match report {
        Ok(report) => {
            debug!(
                "Validated {} document: {} issue(s)",
                doc_type,
                report.issues.len()
            );
            ApiResponse::success(report)
        }

        Err(StudioError::UnknownType(name)) => ApiResponse::not_found(
            "UNKNOWN_DOCUMENT_TYPE",
            &format!("Unknown document type: {}", name),
        ),

        Err(StudioError::NotAnObject) => {
            ApiResponse::bad_request("INVALID_DOCUMENT", "Document must be a JSON object")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::shared::api::custom_json_config;

    #[actix_web::test]
    async fn test_validate_valid_cv() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(validate_document_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/studio/validate/cv")
            .set_json(json!({
                "cvFile": { "_type": "file", "asset": { "_ref": "file-abc123-pdf" } },
                "lastUpdated": "2024-11-02",
                "version": "v2.0"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["valid"], true);
        assert_eq!(
            body["data"]["preview"]["subtitle"],
            "Version v2.0 - Updated 2024-11-02"
        );
    }

    #[actix_web::test]
    async fn test_validate_reports_issues() {
        let app = test::init_service(App::new().service(validate_document_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/studio/validate/about")
            .set_json(json!({
                "name": "Soogyoung Park",
                "bio": [{ "_type": "block" }],
                "email": "nope",
                "credentials": [{ "title": "MA", "institution": "NYU", "year": "2018" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["valid"], false);
        assert_eq!(body["data"]["issues"][0]["path"], "email");
        assert_eq!(body["data"]["itemPreviews"][0]["subtitle"], "NYU - 2018");
    }

    #[actix_web::test]
    async fn test_validate_unknown_type() {
        let app = test::init_service(App::new().service(validate_document_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/studio/validate/post")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_DOCUMENT_TYPE");
    }

    #[actix_web::test]
    async fn test_validate_non_object() {
        let app = test::init_service(App::new().service(validate_document_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/studio/validate/project")
            .set_json(json!(["not", "a", "document"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validate_malformed_json_uses_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(validate_document_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/studio/validate/project")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_DOCUMENT");
    }
}
