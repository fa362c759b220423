// ABOUTME: Maps a single-title detail document to a Details record.
// ABOUTME: Reuses item mapping on the document root and fills gaps from a caller-supplied fallback.

use serde_json::Value;
use tracing::debug;

use crate::candidates::{identifier, non_empty_str, Candidates, FieldPath};
use crate::duration_parse::duration_seconds;
use crate::extract::{content_object, summary_from_item};
use crate::image_utils::{ensure_poster, resolve_image};
use crate::models::{Details, Fallback, Summary, UNKNOWN_TITLE};
use crate::path_utils::normalize_path;

const DESCRIPTION_PATHS: &[FieldPath] = &[
    &["description"],
    &["synopsis"],
    &["summary"],
    &["longDescription"],
    &["body"],
];

const DURATION_PATHS: &[FieldPath] = &[
    &["duration"],
    &["durationInSeconds"],
    &["runtime"],
    &["contentDuration"],
    &["durationSeconds"],
];

const DOCUMENT_ID_PATHS: &[FieldPath] = &[&["id"], &["contentId"]];

const DOCUMENT_TITLE_PATHS: &[FieldPath] = &[&["title"], &["name"]];

const DOCUMENT_URL_PATHS: &[FieldPath] = &[&["url"], &["path"]];

/// `images` alone is resolved structurally.
const DOCUMENT_IMAGE_PATHS: &[FieldPath] = &[
    &["image", "url"],
    &["image", "src"],
    &["imageUrl"],
    &["image_url"],
    &["images"],
];

/// Builds a Details record from a decoded detail document.
///
/// `request_path` is the path the document was requested for; it becomes the
/// `url` when neither the document nor the fallback provides one. Values found
/// in the document always win over the fallback.
pub fn normalize_details<'a>(
    document: &Value,
    fallback: impl Into<Fallback<'a>>,
    request_path: &str,
) -> Details {
    let fallback = fallback.into();
    let mapped = match summary_from_item(document) {
        Ok(summary) => Some(summary),
        Err(reason) => {
            debug!(%reason, "detail document did not map to a summary");
            None
        }
    };
    let summary: Option<&Summary> = mapped.as_ref().or(fallback.summary());

    // Fields that describe the title may sit on the root or on a nested content object.
    let content = content_object(document);
    let mut roots = vec![document];
    if !std::ptr::eq(content, document) {
        roots.push(content);
    }

    let title = mapped
        .as_ref()
        .map(|s| s.title.clone())
        .or_else(|| {
            Candidates::new(DOCUMENT_TITLE_PATHS)
                .first_str(document)
                .map(str::to_string)
        })
        .or_else(|| summary.map(|s| s.title.clone()))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let url = mapped
        .as_ref()
        .map(|s| s.url.clone())
        .or_else(|| {
            Candidates::new(DOCUMENT_URL_PATHS)
                .first_str(document)
                .map(normalize_path)
                .filter(|url| !url.is_empty())
        })
        .or_else(|| summary.map(|s| s.url.clone()))
        .unwrap_or_else(|| normalize_path(request_path));

    let description = roots
        .iter()
        .copied()
        .find_map(|root| Candidates::new(DESCRIPTION_PATHS).first_str(root))
        .map(str::to_string)
        .or_else(|| fallback.description().map(str::to_string));

    let duration = roots
        .iter()
        .copied()
        .find_map(|root| Candidates::new(DURATION_PATHS).first_present(root));
    let duration_seconds = duration.and_then(duration_seconds);
    // Only the `duration` field itself is kept verbatim.
    let raw_duration = roots
        .iter()
        .find_map(|root| root.get("duration").and_then(Value::as_str))
        .map(str::to_string);

    let id = Candidates::new(DOCUMENT_ID_PATHS)
        .first(document, identifier)
        .or_else(|| summary.map(|s| s.id.clone()))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| url.clone());

    let image_url = document_image(document)
        .or_else(|| summary.and_then(|s| s.image_url.clone()))
        .map(|url| ensure_poster(&url));

    Details {
        summary: Summary {
            id,
            title,
            url,
            image_url,
        },
        description,
        duration_seconds,
        raw_duration,
    }
}

fn document_image(document: &Value) -> Option<String> {
    Candidates::new(DOCUMENT_IMAGE_PATHS).first(document, |value| match value {
        Value::String(_) => non_empty_str(value).map(str::to_string),
        _ => resolve_image(value),
    })
}
