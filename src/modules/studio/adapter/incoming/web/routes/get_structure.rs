use actix_web::{get, Responder};

use crate::modules::studio::domain::structure::desk_structure;
use crate::shared::api::ApiResponse;

#[get("/api/studio/structure")]
pub async fn get_structure_handler() -> impl Responder {
    ApiResponse::success(desk_structure())
}
