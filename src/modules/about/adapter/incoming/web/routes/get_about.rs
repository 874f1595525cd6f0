use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::about::application::ports::incoming::use_cases::GetAboutPageError,
    shared::api::ApiResponse, AppState,
};
use crate::about::domain::entities::About;

/// The About document with every field as authored.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "content",
    responses(
        (status = 200, description = "About document, or null when not authored", body = inline(SuccessResponse<Option<About>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get_about_page.execute().await {
        Ok(about) => ApiResponse::success(about),

        Err(GetAboutPageError::RepositoryError(msg)) => {
            error!("Repository error fetching About: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
