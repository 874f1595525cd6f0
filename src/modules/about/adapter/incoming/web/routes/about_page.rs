use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::about::adapter::incoming::web::views;
use crate::shared::web::page::HtmlPage;
use crate::AppState;

/// About page; the About document and CV metadata are fetched concurrently.
#[get("/about")]
pub async fn about_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (about, cv) = futures::join!(
        data.about.get_about_page.execute(),
        data.get_cv_file_use_case.execute()
    );

    let about = match about {
        Ok(about) => about,
        Err(e) => {
            error!("Failed to load About for about page: {}", e);
            return HtmlPage::internal_error();
        }
    };
    let cv = match cv {
        Ok(cv) => cv,
        Err(e) => {
            error!("Failed to load CV for about page: {}", e);
            return HtmlPage::internal_error();
        }
    };

    let meta = views::about_meta(about.as_ref());
    let body = views::about_page(about.as_ref(), cv.as_ref(), &data.images);

    HtmlPage::ok(&meta, &body)
}
