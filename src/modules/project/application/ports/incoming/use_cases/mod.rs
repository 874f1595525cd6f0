mod get_featured_projects;
mod get_project_by_slug;
mod get_projects;
mod suggest_project_slug;

pub use get_featured_projects::{GetFeaturedProjectsError, GetFeaturedProjectsUseCase};
pub use get_project_by_slug::{GetProjectBySlugError, GetProjectBySlugUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use suggest_project_slug::{SuggestProjectSlugError, SuggestProjectSlugUseCase};
