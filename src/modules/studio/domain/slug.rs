use lazy_static::lazy_static;
use regex::Regex;

/// Maximum slug length for project documents.
pub const SLUG_MAX_LENGTH: usize = 96;

/// Upper bound on numbered candidates tried for one title.
pub const MAX_SLUG_CANDIDATES: usize = 100;

lazy_static! {
    static ref URL_SAFE_SLUG: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

pub fn is_url_safe(slug: &str) -> bool {
    URL_SAFE_SLUG.is_match(slug)
}

/// Lowercase, hyphen-separated slug of `title`, at most `max_len` chars.
/// Returns an empty string when the title has nothing sluggable.
pub fn slugify(title: &str, max_len: usize) -> String {
    let full = slug::slugify(title);
    truncate_slug(&full, max_len)
}

fn truncate_slug(slug: &str, max_len: usize) -> String {
    let cut: String = slug.chars().take(max_len).collect();
    cut.trim_end_matches('-').to_string()
}

/// `base`, then `base-2`, `base-3`, ... each kept within `max_len`.
pub fn candidates(base: &str, max_len: usize) -> impl Iterator<Item = String> + '_ {
    (1..=MAX_SLUG_CANDIDATES).map(move |n| {
        if n == 1 {
            truncate_slug(base, max_len)
        } else {
            let suffix = format!("-{}", n);
            let room = max_len.saturating_sub(suffix.len());
            format!("{}{}", truncate_slug(base, room), suffix)
        }
    })
}
