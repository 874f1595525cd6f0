//! The About, CV and Project document types.

use crate::modules::studio::domain::rules::Rule;
use crate::modules::studio::domain::schema::{DocumentType, FieldDef, FieldType, PreviewSelect};
use crate::modules::studio::domain::slug::SLUG_MAX_LENGTH;

pub const ABOUT: &str = "about";
pub const CV: &str = "cv";
pub const PROJECT: &str = "project";

pub fn content_schema() -> Vec<DocumentType> {
    vec![about(), cv(), project()]
}

pub fn document_type(name: &str) -> Option<DocumentType> {
    content_schema().into_iter().find(|t| t.name == name)
}

fn alt_text() -> FieldDef {
    FieldDef::new("alt", "Alternative text", FieldType::String).rule(Rule::Required)
}

fn caption() -> FieldDef {
    FieldDef::new("caption", "Caption", FieldType::String)
}

fn image(fields: Vec<FieldDef>) -> FieldType {
    FieldType::Image {
        hotspot: true,
        fields,
    }
}

fn string_list() -> FieldType {
    FieldType::Array {
        of: Box::new(FieldType::String),
    }
}

fn rich_text(styles: Vec<&'static str>, lists: Vec<&'static str>, annotations: Vec<&'static str>) -> FieldType {
    FieldType::Array {
        of: Box::new(FieldType::Block {
            styles,
            lists,
            decorators: vec!["strong", "em"],
            annotations,
        }),
    }
}

fn social_link(name: &'static str, title: &'static str) -> FieldDef {
    FieldDef::new(name, title, FieldType::Url).rule(Rule::http_uri())
}

fn about() -> DocumentType {
    let credential = FieldType::Object {
        fields: vec![
            FieldDef::new("title", "Degree/Credential", FieldType::String)
                .rule(Rule::Required)
                .describe(r#"e.g., "MA in Art Conservation""#),
            FieldDef::new("institution", "Institution", FieldType::String)
                .rule(Rule::Required)
                .describe(r#"e.g., "NYU Institute of Fine Arts""#),
            FieldDef::new("year", "Year", FieldType::String)
                .rule(Rule::Required)
                .describe(r#"e.g., "2018" or "2015-2017""#),
            FieldDef::new("description", "Description", FieldType::Text { rows: 3 })
                .describe("Optional additional details"),
        ],
        preview: Some(PreviewSelect {
            title: Some("title"),
            subtitle: Some("institution"),
            media: None,
        }),
    };

    DocumentType {
        name: ABOUT,
        title: "About",
        fields: vec![
            FieldDef::new("name", "Full Name", FieldType::String)
                .rule(Rule::Required)
                .describe("Professional name as it should appear on the site"),
            FieldDef::new("profilePhoto", "Profile Photo", image(vec![alt_text()]))
                .describe("Professional headshot"),
            FieldDef::new(
                "bio",
                "Biography",
                rich_text(vec!["normal", "h2", "h3"], vec!["bullet"], vec![]),
            )
            .rule(Rule::Required)
            .rule(Rule::MinItems { min: 1 })
            .describe("Your professional biography"),
            FieldDef::new(
                "credentials",
                "Education & Credentials",
                FieldType::Array {
                    of: Box::new(credential),
                },
            )
            .describe("Your educational background and certifications"),
            FieldDef::new("specializations", "Specializations", string_list()).describe(
                r#"Areas of expertise (e.g., "Oil Paintings", "Paper Conservation")"#,
            ),
            FieldDef::new("email", "Contact Email", FieldType::String)
                .rule(Rule::Required)
                .rule(Rule::Email)
                .describe("Professional contact email"),
            FieldDef::new("phone", "Phone Number", FieldType::String)
                .describe("Optional contact phone number"),
            FieldDef::new(
                "socialLinks",
                "Social Media Links",
                FieldType::Object {
                    fields: vec![
                        social_link("linkedin", "LinkedIn"),
                        social_link("instagram", "Instagram"),
                        social_link("twitter", "Twitter/X"),
                        social_link("website", "Personal Website"),
                    ],
                    preview: None,
                },
            )
            .describe("Optional social media profiles"),
        ],
        preview: PreviewSelect {
            title: Some("name"),
            subtitle: None,
            media: Some("profilePhoto"),
        },
    }
}

fn cv() -> DocumentType {
    DocumentType {
        name: CV,
        title: "CV / Resume",
        fields: vec![
            FieldDef::new(
                "cvFile",
                "CV File",
                FieldType::File {
                    accept: vec![".pdf", ".doc", ".docx"],
                },
            )
            .rule(Rule::Required)
            .rule(Rule::FileExtension {
                extensions: vec!["pdf", "doc", "docx"],
            })
            .describe("Upload your CV/Resume (PDF recommended)"),
            FieldDef::new(
                "lastUpdated",
                "Last Updated",
                FieldType::Date {
                    date_format: "YYYY-MM-DD",
                },
            )
            .rule(Rule::Required)
            .describe("When was this CV last updated?"),
            FieldDef::new("version", "Version", FieldType::String)
                .describe(r#"Optional version number (e.g., "v2.0" or "2024 Q4")"#),
        ],
        preview: PreviewSelect {
            title: None,
            subtitle: Some("lastUpdated"),
            media: None,
        },
    }
}

fn project() -> DocumentType {
    DocumentType {
        name: PROJECT,
        title: "Project",
        fields: vec![
            FieldDef::new("title", "Project Title", FieldType::String)
                .rule(Rule::Required)
                .describe("Name of the conservation project"),
            FieldDef::new(
                "slug",
                "Slug",
                FieldType::Slug {
                    source: "title",
                    max_length: SLUG_MAX_LENGTH,
                },
            )
            .rule(Rule::Required)
            .rule(Rule::Slug)
            .rule(Rule::MaxLength {
                max: SLUG_MAX_LENGTH,
            })
            .describe("Auto-generated URL-friendly identifier"),
            FieldDef::new(
                "mainImage",
                "Main Image",
                image(vec![
                    alt_text().describe("Important for accessibility and SEO"),
                    caption().describe("Optional image caption"),
                ]),
            )
            .rule(Rule::Required),
            FieldDef::new(
                "gallery",
                "Gallery Images",
                FieldType::Array {
                    of: Box::new(image(vec![alt_text(), caption()])),
                },
            )
            .describe("Additional images showing project details, process, etc."),
            FieldDef::new(
                "projectDate",
                "Project Date",
                FieldType::Date {
                    date_format: "YYYY-MM-DD",
                },
            )
            .describe("When the project was completed"),
            FieldDef::new("client", "Client", FieldType::String)
                .describe(r#"Client name or "Private Collection" if confidential"#),
            FieldDef::new(
                "description",
                "Description",
                rich_text(
                    vec!["normal", "h2", "h3", "blockquote"],
                    vec!["bullet", "number"],
                    vec!["link"],
                ),
            )
            .rule(Rule::Required)
            .rule(Rule::MinItems { min: 1 })
            .describe("Detailed description of the conservation work"),
            FieldDef::new("materials", "Materials Used", string_list())
                .describe("List of materials used in the conservation process"),
            FieldDef::new("techniques", "Techniques", string_list())
                .describe("Conservation techniques applied"),
            FieldDef::new(
                "beforeAfter",
                "Before & After Images",
                FieldType::Object {
                    fields: vec![
                        FieldDef::new("before", "Before Image", image(vec![alt_text()])),
                        FieldDef::new("after", "After Image", image(vec![alt_text()])),
                    ],
                    preview: None,
                },
            )
            .describe("Optional before/after comparison images"),
            FieldDef::new(
                "featured",
                "Featured Project",
                FieldType::Boolean {
                    initial_value: false,
                },
            )
            .describe("Highlight this project on the homepage"),
        ],
        preview: PreviewSelect {
            title: Some("title"),
            subtitle: Some("projectDate"),
            media: Some("mainImage"),
        },
    }
}
