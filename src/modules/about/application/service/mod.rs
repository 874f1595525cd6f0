mod get_about_page_service;
mod get_homepage_data_service;
mod get_site_settings_service;

pub use get_about_page_service::GetAboutPageService;
pub use get_homepage_data_service::GetHomepageDataService;
pub use get_site_settings_service::GetSiteSettingsService;
