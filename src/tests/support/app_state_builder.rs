use std::sync::Arc;

use actix_web::web;

use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetHomepageDataUseCase, GetSiteSettingsUseCase,
};
use crate::config::DisplayConfig;
use crate::cv::application::use_cases::get_cv_file::GetCvFileUseCase;
use crate::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
    SuggestProjectSlugUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::content::assets::ImageUrlBuilder;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub; by default each one
/// reports "nothing authored yet".
pub struct TestAppStateBuilder {
    about: AboutUseCases,
    get_cv_file: Arc<dyn GetCvFileUseCase + Send + Sync>,
    project: ProjectUseCases,
    images: ImageUrlBuilder,
    display: DisplayConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            about: AboutUseCases {
                get_homepage_data: StubGetHomepageDataUseCase::not_found(),
                get_about_page: StubGetAboutPageUseCase::not_found(),
                get_site_settings: StubGetSiteSettingsUseCase::not_found(),
            },
            get_cv_file: StubGetCvFileUseCase::not_found(),
            project: ProjectUseCases {
                get_list: StubGetProjectsUseCase::success(vec![]),
                get_featured: StubGetFeaturedProjectsUseCase::success(vec![]),
                get_by_slug: StubGetProjectBySlugUseCase::not_found(),
                suggest_slug: StubSuggestProjectSlugUseCase::success("untitled"),
            },
            images: ImageUrlBuilder::new("testproj", "production"),
            display: DisplayConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_homepage_data(
        mut self,
        uc: Arc<dyn GetHomepageDataUseCase + Send + Sync>,
    ) -> Self {
        self.about.get_homepage_data = uc;
        self
    }

    pub fn with_get_about_page(mut self, uc: Arc<dyn GetAboutPageUseCase + Send + Sync>) -> Self {
        self.about.get_about_page = uc;
        self
    }

    pub fn with_get_site_settings(
        mut self,
        uc: Arc<dyn GetSiteSettingsUseCase + Send + Sync>,
    ) -> Self {
        self.about.get_site_settings = uc;
        self
    }

    pub fn with_get_cv_file(mut self, uc: Arc<dyn GetCvFileUseCase + Send + Sync>) -> Self {
        self.get_cv_file = uc;
        self
    }

    pub fn with_get_projects(mut self, uc: Arc<dyn GetProjectsUseCase + Send + Sync>) -> Self {
        self.project.get_list = uc;
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        uc: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    ) -> Self {
        self.project.get_featured = uc;
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    ) -> Self {
        self.project.get_by_slug = uc;
        self
    }

    pub fn with_suggest_slug(mut self, uc: Arc<dyn SuggestProjectSlugUseCase + Send + Sync>) -> Self {
        self.project.suggest_slug = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            about: self.about,
            get_cv_file_use_case: self.get_cv_file,
            project: self.project,
            images: self.images,
            display: self.display,
        })
    }
}
