use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    cv::application::use_cases::get_cv_file::GetCvFileError, shared::api::ApiResponse, AppState,
};
use crate::cv::domain::entities::CvFile;

/// CV download metadata; `data` is null until a CV has been uploaded.
#[utoipa::path(
    get,
    path = "/api/cv",
    tag = "content",
    responses(
        (status = 200, description = "CV metadata, or null when no CV exists", body = inline(SuccessResponse<Option<CvFile>>)),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/cv")]
pub async fn get_cv_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_cv_file_use_case.execute().await {
        Ok(cv) => ApiResponse::success(cv),

        Err(GetCvFileError::RepositoryError(msg)) => {
            error!("Repository error fetching CV metadata: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
