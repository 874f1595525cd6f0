use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
    SuggestProjectSlugUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub suggest_slug: Arc<dyn SuggestProjectSlugUseCase + Send + Sync>,
}
