mod get_about_page;
mod get_homepage_data;
mod get_site_settings;

pub use get_about_page::{GetAboutPageError, GetAboutPageUseCase};
pub use get_homepage_data::{GetHomepageDataError, GetHomepageDataUseCase};
pub use get_site_settings::{GetSiteSettingsError, GetSiteSettingsUseCase};
