use actix_web::{get, web, HttpResponse};
use tracing::{error, info};

use crate::modules::project::adapter::incoming::web::views;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectBySlugError;
use crate::shared::web::page::HtmlPage;
use crate::AppState;

/// Project detail. The project and the site settings are fetched
/// concurrently; either failing fails the whole page.
#[get("/projects/{slug}")]
pub async fn project_detail_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let slug = path.into_inner();

    let (project, settings) = futures::join!(
        data.project.get_by_slug.execute(&slug),
        data.about.get_site_settings.execute()
    );

    let project = match project {
        Ok(project) => project,
        Err(GetProjectBySlugError::NotFound) => {
            info!("No project with slug={}", slug);
            return HtmlPage::not_found("Project not found");
        }
        Err(GetProjectBySlugError::RepositoryError(msg)) => {
            error!("Repository error fetching project slug={}: {}", slug, msg);
            return HtmlPage::internal_error();
        }
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load site settings for project slug={}: {}", slug, e);
            return HtmlPage::internal_error();
        }
    };

    let site_title = settings.as_ref().and_then(|s| s.site_title.as_deref());
    let meta = views::project_meta(&project, site_title, data.display.list_excerpt_length);
    let body = views::project_detail(&project, &data.images);

    HtmlPage::ok(&meta, &body)
}
