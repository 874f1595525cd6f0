use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::about::application::ports::incoming::use_cases::GetHomepageDataError,
    shared::api::ApiResponse, AppState,
};
use crate::about::domain::entities::HomepageData;

/// Home page summary; the tagline is the first span of the biography.
#[utoipa::path(
    get,
    path = "/api/homepage",
    tag = "content",
    responses(
        (status = 200, description = "Hero data for the home page", body = inline(SuccessResponse<Option<HomepageData>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/homepage")]
pub async fn get_homepage_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get_homepage_data.execute().await {
        Ok(summary) => ApiResponse::success(summary),

        Err(GetHomepageDataError::RepositoryError(msg)) => {
            error!("Repository error fetching homepage data: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
