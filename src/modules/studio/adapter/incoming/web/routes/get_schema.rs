use actix_web::{get, Responder};

use crate::modules::studio::domain::content_schema::content_schema;
use crate::shared::api::ApiResponse;

#[get("/api/studio/schema")]
pub async fn get_schema_handler() -> impl Responder {
    ApiResponse::success(content_schema())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_get_schema() {
        let app = test::init_service(App::new().service(get_schema_handler)).await;

        let req = test::TestRequest::get().uri("/api/studio/schema").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let types = body["data"].as_array().unwrap();
        assert_eq!(types.len(), 3);
        assert_eq!(types[2]["name"], "project");
        assert_eq!(types[2]["fields"][1]["source"], "title");
        assert_eq!(types[2]["fields"][1]["maxLength"], 96);
    }
}
