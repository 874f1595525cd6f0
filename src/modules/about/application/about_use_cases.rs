use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetHomepageDataUseCase, GetSiteSettingsUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get_homepage_data: Arc<dyn GetHomepageDataUseCase + Send + Sync>,
    pub get_about_page: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    pub get_site_settings: Arc<dyn GetSiteSettingsUseCase + Send + Sync>,
}
