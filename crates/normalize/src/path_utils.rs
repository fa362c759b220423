// ABOUTME: Canonical path normalization for catalog urls and detail lookups.
// ABOUTME: Reduces absolute urls, root-relative paths and bare slugs to one relative key.

use once_cell::sync::Lazy;
use url::Url;

/// Origin that relative inputs are resolved against. Only its path survives.
static RESOLVE_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://playfeed.invalid/").expect("valid resolve base url"));

/// Normalizes a url or path to the canonical relative form used as a lookup key.
///
/// Every input is resolved as a url path: absolute urls (`scheme://host/...`)
/// and protocol-relative `//host/...` values contribute only their path, and
/// anything else is rooted at `/`. Resolution removes dot segments,
/// percent-encodes non-ASCII characters and drops query strings and fragments,
/// so one resource yields one key however upstream wrote it. Leading `/` are
/// stripped. Normalizing an already canonical path returns it unchanged.
pub fn normalize_path(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let path = match resolved_path(trimmed) {
        Some(path) => path,
        None => unresolved_path(trimmed).to_string(),
    };

    path.trim_start_matches('/').to_string()
}

fn resolved_path(input: &str) -> Option<String> {
    if input.contains("://") {
        if let Some(parsed) = Url::parse(input).ok().filter(Url::has_host) {
            return Some(parsed.path().to_string());
        }
    }

    let resolved = if input.starts_with("//") && !input.starts_with("///") {
        RESOLVE_BASE.join(input)
    } else {
        RESOLVE_BASE.join(&format!("/{}", input.trim_start_matches('/')))
    };
    resolved.ok().map(|url| url.path().to_string())
}

/// Plain slicing for the rare input the url parser rejects, such as a bad authority.
fn unresolved_path(input: &str) -> &str {
    let without_authority = match input.strip_prefix("//") {
        Some(rest) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => input,
    };
    let end = without_authority
        .find(|c| c == '?' || c == '#')
        .unwrap_or(without_authority.len());
    &without_authority[..end]
}
