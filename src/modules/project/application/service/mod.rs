mod get_featured_projects_service;
mod get_project_by_slug_service;
mod get_projects_service;
mod suggest_project_slug_service;

pub use get_featured_projects_service::GetFeaturedProjectsService;
pub use get_project_by_slug_service::GetProjectBySlugService;
pub use get_projects_service::GetProjectsService;
pub use suggest_project_slug_service::SuggestProjectSlugService;
