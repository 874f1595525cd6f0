mod about_page;
mod get_about;
mod get_homepage;
mod get_site_settings;

pub use about_page::*;
pub use get_about::*;
pub use get_homepage::*;
pub use get_site_settings::*;
