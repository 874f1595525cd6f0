use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::about::application::ports::incoming::use_cases::GetSiteSettingsError,
    shared::api::ApiResponse, AppState,
};
use crate::about::domain::entities::SiteSettings;

#[utoipa::path(
    get,
    path = "/api/site-settings",
    tag = "content",
    responses(
        (status = 200, description = "Site-wide settings derived from the About document", body = inline(SuccessResponse<Option<SiteSettings>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/site-settings")]
pub async fn get_site_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get_site_settings.execute().await {
        Ok(settings) => ApiResponse::success(settings),

        Err(GetSiteSettingsError::RepositoryError(msg)) => {
            error!("Repository error fetching site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
