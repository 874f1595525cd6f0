use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::home::adapter::incoming::web::views;
use crate::shared::web::page::HtmlPage;
use crate::AppState;

/// Home page. Homepage summary and featured projects load concurrently.
#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (summary, featured) = futures::join!(
        data.about.get_homepage_data.execute(),
        data.project.get_featured.execute()
    );

    let summary = match summary {
        Ok(summary) => summary,
        Err(e) => {
            error!("Failed to load homepage summary: {}", e);
            return HtmlPage::internal_error();
        }
    };
    let featured = match featured {
        Ok(featured) => featured,
        Err(e) => {
            error!("Failed to load featured projects: {}", e);
            return HtmlPage::internal_error();
        }
    };

    let meta = views::home_meta(summary.as_ref());
    let body = views::home_page(summary.as_ref(), &featured, &data.images);

    HtmlPage::ok(&meta, &body)
}
