use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::project::application::ports::incoming::use_cases::GetProjectsError,
    shared::api::ApiResponse, AppState,
};
use crate::project::domain::entities::ProjectCard;

/// Project listing cards with short excerpts.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, newest first", body = inline(SuccessResponse<Vec<ProjectCard>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(cards) => ApiResponse::success(cards),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
