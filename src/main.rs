pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::about;
pub use modules::cv;
pub use modules::home;
pub use modules::project;
pub use modules::studio;

use crate::about::adapter::outgoing::AboutQuerySanity;
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::service::{
    GetAboutPageService, GetHomepageDataService, GetSiteSettingsService,
};
use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, DisplayConfig};
use crate::cv::adapter::outgoing::CvQuerySanity;
use crate::cv::application::services::GetCvFileService;
use crate::cv::application::use_cases::get_cv_file::GetCvFileUseCase;
use crate::project::adapter::outgoing::ProjectQuerySanity;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    GetFeaturedProjectsService, GetProjectBySlugService, GetProjectsService,
    SuggestProjectSlugService,
};
use crate::project::domain::policies::ListingPolicy;
use crate::shared::api::custom_json_config;
use crate::shared::content::assets::ImageUrlBuilder;
use crate::shared::content_store::SanityClient;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub about: AboutUseCases,
    pub get_cv_file_use_case: Arc<dyn GetCvFileUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub images: ImageUrlBuilder,
    pub display: DisplayConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.bind_address();

    info!(
        project_id = %config.store.project_id,
        dataset = %config.store.dataset,
        api_base = %config.store.api_base(),
        "Content store configured"
    );

    // One client shared by every adapter
    let store = SanityClient::new(config.store.clone());
    let images = ImageUrlBuilder::new(&config.store.project_id, &config.store.dataset);
    let policy = ListingPolicy::from(&config.display);

    // About
    let about_query = AboutQuerySanity::new(store.clone());
    let about = AboutUseCases {
        get_homepage_data: Arc::new(GetHomepageDataService::new(about_query.clone())),
        get_about_page: Arc::new(GetAboutPageService::new(Arc::new(about_query.clone()))),
        get_site_settings: Arc::new(GetSiteSettingsService::new(about_query)),
    };

    // CV
    let get_cv_file_use_case = Arc::new(GetCvFileService::new(CvQuerySanity::new(store.clone())));

    // Projects
    let project_query = ProjectQuerySanity::new(store.clone());
    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone(), policy.clone())),
        get_featured: Arc::new(GetFeaturedProjectsService::new(
            Arc::new(project_query.clone()),
            policy,
        )),
        get_by_slug: Arc::new(GetProjectBySlugService::new(project_query.clone())),
        suggest_slug: Arc::new(SuggestProjectSlugService::new(project_query)),
    };

    let state = AppState {
        about,
        get_cv_file_use_case,
        project,
        images,
        display: config.display.clone(),
    };

    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::home::adapter::incoming::web::routes::home_page_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::about_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::project_detail_page_handler);
    // About / CV
    cfg.service(crate::about::adapter::incoming::web::routes::get_homepage_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_site_settings_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv_handler);
    // Projects (featured before the slug route)
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    // Studio
    cfg.service(crate::studio::adapter::incoming::web::routes::get_schema_handler);
    cfg.service(crate::studio::adapter::incoming::web::routes::get_structure_handler);
    cfg.service(crate::studio::adapter::incoming::web::routes::validate_document_handler);
    cfg.service(crate::studio::adapter::incoming::web::routes::suggest_slug_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
