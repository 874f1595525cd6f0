// src/shared/content_store/queries.rs
//! The fixed set of read projections issued against the content store.
//!
//! Singleton documents are always read with `[0]` (first match). Derived
//! fields such as taglines and excerpts are computed after decoding.

/// Dereferenced image asset with the metadata pages need for layout.
macro_rules! image_projection {
    () => {
        "asset-> { _id, url, metadata { lqip, dimensions } }"
    };
}

pub const HOMEPAGE_DATA: &str = concat!(
    r#"*[_type == "about"][0] {
  name,
  "bioLead": bio[0...1],
  profilePhoto { "#,
    image_projection!(),
    r#", alt },
  email,
  socialLinks { linkedin, instagram, twitter, website }
}"#
);

pub const ABOUT_PAGE: &str = concat!(
    r#"*[_type == "about"][0] {
  name,
  profilePhoto { "#,
    image_projection!(),
    r#", alt },
  bio,
  credentials[] { title, institution, year, description },
  specializations,
  email,
  phone,
  socialLinks { linkedin, instagram, twitter, website }
}"#
);

pub const SITE_SETTINGS: &str = r#"*[_type == "about"][0] {
  name,
  email,
  "bioLead": bio[0...1],
  socialLinks { linkedin, instagram, twitter, website }
}"#;

pub const CV_FILE: &str = r#"*[_type == "cv"][0] {
  cvFile { asset-> { _id, url, originalFilename, size } },
  lastUpdated,
  version
}"#;

pub const ALL_PROJECTS: &str = concat!(
    r#"*[_type == "project" && defined(slug.current)] | order(projectDate desc) {
  _id,
  title,
  slug,
  mainImage { "#,
    image_projection!(),
    r#", alt, caption },
  projectDate,
  client,
  description,
  featured
}"#
);

pub const FEATURED_PROJECTS: &str = concat!(
    r#"*[_type == "project" && featured == true && defined(slug.current)] | order(projectDate desc) [0...$limit] {
  _id,
  title,
  slug,
  mainImage { "#,
    image_projection!(),
    r#", alt, caption },
  projectDate,
  client,
  description,
  featured
}"#
);

pub const PROJECT_BY_SLUG: &str = concat!(
    r#"*[_type == "project" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  mainImage { "#,
    image_projection!(),
    r#", alt, caption },
  gallery[] { "#,
    image_projection!(),
    r#", alt, caption },
  projectDate,
  client,
  description,
  materials,
  techniques,
  beforeAfter {
    before { "#,
    image_projection!(),
    r#", alt },
    after { "#,
    image_projection!(),
    r#", alt }
  },
  featured
}"#
);

pub const PROJECT_SLUG_EXISTS: &str =
    r#"count(*[_type == "project" && slug.current == $slug]) > 0"#;

/// Cheapest query that proves the dataset is reachable.
pub const PING: &str = r#"count(*[_type == "about"])"#;
