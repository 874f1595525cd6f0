use utoipa::OpenApi;

use crate::about::domain::entities::{About, Credential, HomepageData, SiteSettings, SocialLinks};
use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::cv::domain::entities::CvFile;
use crate::project::domain::entities::{BeforeAfter, Project, ProjectCard, Slug};
use crate::shared::content::assets::{
    Dimensions, FileAsset, FileRef, ImageAsset, ImageMetadata, ImageRef,
};
use crate::shared::content::portable_text::{Block, MarkDef, Span};
use crate::studio::adapter::incoming::web::routes::{SlugSuggestion, ValidationReport};
use crate::studio::domain::preview::{ItemPreview, Preview};
use crate::studio::domain::validation::ValidationIssue;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Conservation Portfolio API",
        version = "1.0.0",
        description = "Read-only JSON API over the portfolio's published content"
    ),
    paths(
        // About / CV
        crate::about::adapter::incoming::web::routes::get_homepage_handler,
        crate::about::adapter::incoming::web::routes::get_about_handler,
        crate::about::adapter::incoming::web::routes::get_site_settings_handler,
        crate::cv::adapter::incoming::web::routes::get_cv_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project_handler,

        // Studio endpoints
        crate::studio::adapter::incoming::web::routes::validate_document_handler,
        crate::studio::adapter::incoming::web::routes::suggest_slug_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content
            About,
            Credential,
            SocialLinks,
            HomepageData,
            SiteSettings,
            CvFile,
            Project,
            ProjectCard,
            Slug,
            BeforeAfter,

            // Assets and rich text
            ImageRef,
            ImageAsset,
            ImageMetadata,
            Dimensions,
            FileRef,
            FileAsset,
            Block,
            Span,
            MarkDef,

            // Studio
            ValidationReport,
            ValidationIssue,
            Preview,
            ItemPreview,
            SlugSuggestion
        )
    ),
    tags(
        (name = "content", description = "Singleton documents: about, homepage, site settings, CV"),
        (name = "projects", description = "Published conservation projects"),
        (name = "studio", description = "Authoring helpers; never write to the store"),
    )
)]
pub struct ApiDoc;
