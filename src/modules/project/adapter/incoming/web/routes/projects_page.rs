use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::project::adapter::incoming::web::views;
use crate::shared::web::page::HtmlPage;
use crate::AppState;

#[get("/projects")]
pub async fn projects_page_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.project.get_list.execute().await {
        Ok(cards) => {
            let (meta, body) = views::projects_page(&cards, &data.images);
            HtmlPage::ok(&meta, &body)
        }
        Err(e) => {
            error!("Failed to render projects page: {}", e);
            HtmlPage::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_card;
    use crate::tests::support::stubs::StubGetProjectsUseCase;

    #[actix_web::test]
    async fn test_projects_page_lists_cards() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjectsUseCase::success(vec![
                sample_card("baroque-altarpiece", true),
                sample_card("lacquer-screen", false),
            ]))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(projects_page_handler)).await;

        let req = test::TestRequest::get().uri("/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(r#"href="/projects/baroque-altarpiece""#));
        assert!(body.contains(r#"href="/projects/lacquer-screen""#));
        assert_eq!(body.matches("project-card").count(), 2);
    }

    #[actix_web::test]
    async fn test_projects_page_empty_state() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjectsUseCase::success(vec![]))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(projects_page_handler)).await;

        let req = test::TestRequest::get().uri("/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("No projects yet"));
    }

    #[actix_web::test]
    async fn test_projects_page_store_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjectsUseCase::error("store unreachable"))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(projects_page_handler)).await;

        let req = test::TestRequest::get().uri("/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(!body.contains("project-card"));
    }
}
