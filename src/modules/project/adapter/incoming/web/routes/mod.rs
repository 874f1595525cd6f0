mod get_featured_projects;
mod get_project;
mod get_projects;
mod project_detail_page;
mod projects_page;

pub use get_featured_projects::*;
pub use get_project::*;
pub use get_projects::*;
pub use project_detail_page::*;
pub use projects_page::*;
