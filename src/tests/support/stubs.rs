use std::sync::Arc;

use async_trait::async_trait;

use crate::about::application::ports::incoming::use_cases::{
    GetAboutPageError, GetAboutPageUseCase, GetHomepageDataError, GetHomepageDataUseCase,
    GetSiteSettingsError, GetSiteSettingsUseCase,
};
use crate::about::domain::entities::{About, HomepageData, SiteSettings};
use crate::cv::application::use_cases::get_cv_file::{GetCvFileError, GetCvFileUseCase};
use crate::cv::domain::entities::CvFile;
use crate::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsError, GetFeaturedProjectsUseCase, GetProjectBySlugError,
    GetProjectBySlugUseCase, GetProjectsError, GetProjectsUseCase, SuggestProjectSlugError,
    SuggestProjectSlugUseCase,
};
use crate::project::domain::entities::{Project, ProjectCard};

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

pub struct StubGetHomepageDataUseCase {
    pub result: Result<Option<HomepageData>, GetHomepageDataError>,
}

#[async_trait]
impl GetHomepageDataUseCase for StubGetHomepageDataUseCase {
    async fn execute(&self) -> Result<Option<HomepageData>, GetHomepageDataError> {
        self.result.clone()
    }
}

impl StubGetHomepageDataUseCase {
    pub fn found(data: HomepageData) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(Some(data)),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self { result: Ok(None) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetHomepageDataError::RepositoryError(msg.to_string())),
        })
    }
}

pub struct StubGetAboutPageUseCase {
    pub result: Result<Option<About>, GetAboutPageError>,
}

#[async_trait]
impl GetAboutPageUseCase for StubGetAboutPageUseCase {
    async fn execute(&self) -> Result<Option<About>, GetAboutPageError> {
        self.result.clone()
    }
}

impl StubGetAboutPageUseCase {
    pub fn found(about: About) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(Some(about)),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self { result: Ok(None) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetAboutPageError::RepositoryError(msg.to_string())),
        })
    }
}

pub struct StubGetSiteSettingsUseCase {
    pub result: Result<Option<SiteSettings>, GetSiteSettingsError>,
}

#[async_trait]
impl GetSiteSettingsUseCase for StubGetSiteSettingsUseCase {
    async fn execute(&self) -> Result<Option<SiteSettings>, GetSiteSettingsError> {
        self.result.clone()
    }
}

impl StubGetSiteSettingsUseCase {
    pub fn found(settings: SiteSettings) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(Some(settings)),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self { result: Ok(None) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetSiteSettingsError::RepositoryError(msg.to_string())),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// CV
// ──────────────────────────────────────────────────────────
//

pub struct StubGetCvFileUseCase {
    pub result: Result<Option<CvFile>, GetCvFileError>,
}

#[async_trait]
impl GetCvFileUseCase for StubGetCvFileUseCase {
    async fn execute(&self) -> Result<Option<CvFile>, GetCvFileError> {
        self.result.clone()
    }
}

impl StubGetCvFileUseCase {
    pub fn found(cv: CvFile) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(Some(cv)),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self { result: Ok(None) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetCvFileError::RepositoryError(msg.to_string())),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

pub struct StubGetProjectsUseCase {
    pub result: Result<Vec<ProjectCard>, GetProjectsError>,
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetProjectsError> {
        self.result.clone()
    }
}

impl StubGetProjectsUseCase {
    pub fn success(cards: Vec<ProjectCard>) -> Arc<Self> {
        Arc::new(Self { result: Ok(cards) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetProjectsError::QueryFailed(msg.to_string())),
        })
    }
}

pub struct StubGetFeaturedProjectsUseCase {
    pub result: Result<Vec<ProjectCard>, GetFeaturedProjectsError>,
}

#[async_trait]
impl GetFeaturedProjectsUseCase for StubGetFeaturedProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetFeaturedProjectsError> {
        self.result.clone()
    }
}

impl StubGetFeaturedProjectsUseCase {
    pub fn success(cards: Vec<ProjectCard>) -> Arc<Self> {
        Arc::new(Self { result: Ok(cards) })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetFeaturedProjectsError::RepositoryError(msg.to_string())),
        })
    }
}

pub struct StubGetProjectBySlugUseCase {
    pub result: Result<Project, GetProjectBySlugError>,
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.result.clone()
    }
}

impl StubGetProjectBySlugUseCase {
    pub fn found(project: Project) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(project),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetProjectBySlugError::NotFound),
        })
    }

    pub fn error(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(GetProjectBySlugError::RepositoryError(msg.to_string())),
        })
    }
}

pub struct StubSuggestProjectSlugUseCase {
    pub result: Result<String, SuggestProjectSlugError>,
}

#[async_trait]
impl SuggestProjectSlugUseCase for StubSuggestProjectSlugUseCase {
    async fn execute(&self, _title: &str) -> Result<String, SuggestProjectSlugError> {
        self.result.clone()
    }
}

impl StubSuggestProjectSlugUseCase {
    pub fn success(slug: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(slug.to_string()),
        })
    }

    pub fn error(err: SuggestProjectSlugError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}
