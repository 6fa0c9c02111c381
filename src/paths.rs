//! Locale-aware URL path helpers.
//!
//! The default language is served at the site root; the alternate language
//! lives under its code prefix (`/en/...`). These helpers keep templates
//! honest about that layout when they build links or inspect the request
//! path during a build.

use crate::language::Language;

/// Prefix `path` with the language segment where needed.
///
/// `path` is first normalized to carry exactly one leading slash (one is
/// prefixed if absent; existing extra slashes are left alone). The default
/// language returns the normalized path unchanged; the alternate language
/// returns it under `/<code>`.
pub fn localized_path(lang: Language, path: &str) -> String {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if lang.is_default() {
        normalized
    } else {
        format!("/{}{}", lang.code(), normalized)
    }
}

/// The language encoded in a URL.
///
/// Accepts either a bare path (`/en/about`) or an absolute URL
/// (`https://host/en/about?q=1`); host, query, and fragment are ignored.
/// Returns the declared language matching the first non-empty path segment,
/// or the default language when no segment matches.
pub fn language_from_url(url: &str) -> Language {
    match path_portion(url).split('/').find(|segment| !segment.is_empty()) {
        Some(segment) => Language::from_code(segment).unwrap_or(Language::DEFAULT),
        None => Language::DEFAULT,
    }
}

/// The path portion of `url`: everything after the host for an absolute
/// URL, with the query and fragment cut off.
fn path_portion(url: &str) -> &str {
    let path = match url.find("://") {
        Some(scheme_end) => {
            let after_scheme = &url[scheme_end + 3..];
            match after_scheme.find('/') {
                Some(host_end) => &after_scheme[host_end..],
                None => "",
            }
        }
        None => url,
    };

    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}
