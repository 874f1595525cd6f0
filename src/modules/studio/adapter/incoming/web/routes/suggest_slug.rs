use actix_web::{get, http::StatusCode, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::{
    modules::project::application::ports::incoming::use_cases::SuggestProjectSlugError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    #[serde(default)]
    pub title: String,
}

#[derive(Serialize, ToSchema)]
pub struct SlugSuggestion {
    pub slug: String,
}

/// Suggests a free project slug for a title. Read-only: nothing is reserved.
#[utoipa::path(
    get,
    path = "/api/studio/slug",
    tag = "studio",
    params(
        ("title" = String, Query, description = "Project title", example = "Baroque Altarpiece")
    ),
    responses(
        (
            status = 200,
            description = "Slug not used by any existing project",
            body = inline(SuccessResponse<SlugSuggestion>),
            example = json!({
                "success": true,
                "data": { "slug": "baroque-altarpiece-2" }
            })
        ),
        (status = 400, description = "Title has no letters or digits", body = ErrorResponse),
        (status = 409, description = "Every candidate slug is taken", body = ErrorResponse),
        (status = 500, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/studio/slug")]
pub async fn suggest_slug_handler(
    query: web::Query<SlugQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.suggest_slug.execute(&query.title).await {
        Ok(slug) => ApiResponse::success(SlugSuggestion { slug }),

        Err(SuggestProjectSlugError::EmptyTitle) => ApiResponse::bad_request(
            "INVALID_TITLE",
            "Title must contain at least one letter or digit",
        ),

        Err(SuggestProjectSlugError::Exhausted(base)) => ApiResponse::error(
            StatusCode::CONFLICT,
            "SLUG_EXHAUSTED",
            &format!("No free slug found for '{}'", base),
        ),

        Err(SuggestProjectSlugError::RepositoryError(msg)) => {
            error!("Repository error suggesting slug for '{}': {}", query.title, msg);
            ApiResponse::internal_error()
        }
    }
}
