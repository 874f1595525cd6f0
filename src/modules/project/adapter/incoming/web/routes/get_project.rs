use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::project::application::ports::incoming::use_cases::GetProjectBySlugError,
    shared::api::ApiResponse, AppState,
};
use crate::project::domain::entities::Project;

/// A single project by exact slug.
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(
        ("slug" = String, Path, description = "Project slug", example = "baroque-altarpiece")
    ),
    responses(
        (status = 200, description = "Full project document", body = inline(SuccessResponse<Project>)),
        (
            status = 404,
            description = "No project has this slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found"
                }
            })
        ),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectBySlugError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectBySlugError::RepositoryError(msg)) => {
            error!("Repository error fetching project slug={}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::StubGetProjectBySlugUseCase;

    #[actix_web::test]
    async fn test_get_project_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(StubGetProjectBySlugUseCase::found(sample_project(
                "baroque-altarpiece",
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/baroque-altarpiece")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Baroque Altarpiece");
        assert_eq!(body["data"]["slug"]["current"], "baroque-altarpiece");
        assert_eq!(body["data"]["projectDate"], "2024-03-12");
    }

    #[actix_web::test]
    async fn test_get_project_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(StubGetProjectBySlugUseCase::not_found())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_project_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(StubGetProjectBySlugUseCase::error("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/baroque-altarpiece")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
