//! URL absolutization and link-target validation.
//!
//! File paths coming out of the CMS are site-relative; link fields may
//! hold anything an editor typed. Both helpers are pure string work, no
//! network or filesystem access.

use url::Url;

/// Join a possibly-relative path onto a base URL.
///
/// `None` or empty input yields `""`. Inputs that already carry a
/// `scheme://` prefix are returned unchanged, which also makes the
/// function idempotent on its own output. Joining never produces a
/// doubled slash regardless of how the base or path are delimited.
pub fn to_absolute_url(path: Option<&str>, base_url: &str) -> String {
    let Some(path) = path else {
        return String::new();
    };
    if path.is_empty() {
        return String::new();
    }
    if has_scheme(path) {
        return path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Validate a link target for use as an href.
///
/// Empty values and the `"#"` placeholder editors leave behind map to
/// the site root. Leading-slash paths are trusted as internal. Anything
/// else must parse as an absolute URL or it degrades to `"/"`.
pub fn to_safe_link_href(url: &str) -> String {
    if url.is_empty() || url == "#" {
        return "/".to_string();
    }
    if url.starts_with('/') {
        return url.to_string();
    }
    match Url::parse(url) {
        Ok(_) => url.to_string(),
        Err(_) => "/".to_string(),
    }
}

fn has_scheme(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
