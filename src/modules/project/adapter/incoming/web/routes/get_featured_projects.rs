use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{shared::api::ApiResponse, AppState};
use crate::project::domain::entities::ProjectCard;

/// Registered ahead of `/api/projects/{slug}`.
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects, newest first, capped by the featured limit", body = inline(SuccessResponse<Vec<ProjectCard>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_featured.execute().await {
        Ok(cards) => ApiResponse::success(cards),
        Err(e) => {
            error!("Failed to list featured projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
