// ABOUTME: Shape-tolerant discovery of catalog entries and their Summary fields.
// ABOUTME: Finds the item list inside an unknown envelope and maps each item to a Summary.

use serde_json::Value;
use tracing::{debug, trace};

use crate::candidates::{self, identifier, FieldPath, Scope, ScopedCandidates};
use crate::error::ExtractError;
use crate::image_utils::{ensure_poster, resolve_image};
use crate::models::Summary;
use crate::path_utils::normalize_path;

/// Fixed envelope locations checked, in order, for an item array.
const LIST_PATHS: &[FieldPath] = &[
    &["content"],
    &["items"],
    &["feed", "items"],
    &["feed", "data", "items"],
    &["page", "items"],
    &["page", "content", "items"],
    &["response", "items"],
];

/// Locations holding an array of sections, each of which may carry `items`.
const SECTION_PATHS: &[FieldPath] = &[&["sections"], &["feed", "sections"]];

/// Keys under which an item may nest its actual content object.
const CONTENT_KEYS: &[&str] = &["content", "program", "asset", "target", "item"];

const TITLE_FIELDS: &[(Scope, FieldPath)] = &[
    (Scope::Content, &["title"]),
    (Scope::Content, &["name"]),
    (Scope::Item, &["title"]),
    (Scope::Item, &["name"]),
];

const URL_FIELDS: &[(Scope, FieldPath)] = &[
    (Scope::Content, &["url"]),
    (Scope::Content, &["path"]),
    (Scope::Content, &["productPath"]),
    (Scope::Item, &["url"]),
    (Scope::Item, &["path"]),
];

const ID_FIELDS: &[(Scope, FieldPath)] = &[
    (Scope::Content, &["id"]),
    (Scope::Item, &["id"]),
    (Scope::Content, &["contentId"]),
    (Scope::Content, &["programId"]),
    (Scope::Content, &["uuid"]),
    (Scope::Content, &["slug"]),
];

/// Only `images` is resolved structurally; the others must hold a url string.
const IMAGE_FIELDS: &[(Scope, FieldPath)] = &[
    (Scope::Content, &["imageUrl"]),
    (Scope::Content, &["image_url"]),
    (Scope::Content, &["image", "url"]),
    (Scope::Content, &["image", "src"]),
    (Scope::Content, &["images"]),
    (Scope::Item, &["image", "url"]),
    (Scope::Item, &["image", "src"]),
    (Scope::Item, &["imageUrl"]),
    (Scope::Item, &["image_url"]),
];

/// Result of mapping a whole catalog envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogExtraction {
    pub summaries: Vec<Summary>,
    /// Number of raw entries found before unmappable ones were dropped.
    pub raw_count: usize,
}

impl CatalogExtraction {
    pub fn discarded(&self) -> usize {
        self.raw_count - self.summaries.len()
    }
}

/// Locates the list of entries inside an envelope of unknown shape.
///
/// Returns an empty slice when no candidate location holds an array.
pub fn discover_items(envelope: &Value) -> &[Value] {
    if let Value::Array(items) = envelope {
        return items;
    }

    if let Some(items) = LIST_PATHS
        .iter()
        .find_map(|path| candidates::array_at(envelope, path))
    {
        return items;
    }

    if let Some(feeds) = candidates::array_at(envelope, &["feeds"]) {
        for feed in feeds {
            for key in ["content", "items"] {
                if let Some(items) = candidates::array_at(feed, &[key]).filter(|a| !a.is_empty()) {
                    return items;
                }
            }
        }
    }

    SECTION_PATHS
        .iter()
        .filter_map(|path| candidates::array_at(envelope, path))
        .flatten()
        .find_map(|section| candidates::array_at(section, &["items"]).filter(|a| !a.is_empty()))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Runs list discovery and maps every entry, dropping those without a title or url.
pub fn extract_summaries(envelope: &Value) -> CatalogExtraction {
    let items = discover_items(envelope);
    debug!(raw_count = items.len(), "discovered catalog items");

    let summaries = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match summary_from_item(item) {
            Ok(summary) => Some(summary),
            Err(reason) => {
                trace!(index, %reason, "dropping catalog item");
                None
            }
        })
        .collect();

    CatalogExtraction {
        summaries,
        raw_count: items.len(),
    }
}

/// The sub-object that actually carries an item's fields.
pub fn content_object(item: &Value) -> &Value {
    CONTENT_KEYS
        .iter()
        .find_map(|key| item.get(*key).filter(|v| v.is_object()))
        .unwrap_or(item)
}

/// Maps a single raw item to a Summary, reporting why it could not be mapped.
pub fn summary_from_item(item: &Value) -> Result<Summary, ExtractError> {
    if !item.is_object() {
        return Err(ExtractError::NotAnObject);
    }
    let content = content_object(item);

    let title = ScopedCandidates::new(TITLE_FIELDS)
        .first_str(content, item)
        .ok_or(ExtractError::MissingTitle)?;
    let url = ScopedCandidates::new(URL_FIELDS)
        .first_str(content, item)
        .map(normalize_path)
        .filter(|url| !url.is_empty())
        .ok_or(ExtractError::MissingUrl)?;

    let id = ScopedCandidates::new(ID_FIELDS)
        .first(content, item, identifier)
        .unwrap_or_else(|| url.clone());

    Ok(Summary {
        id,
        title: title.to_string(),
        url,
        image_url: item_image(content, item),
    })
}

fn item_image(content: &Value, item: &Value) -> Option<String> {
    ScopedCandidates::new(IMAGE_FIELDS)
        .first(content, item, |value| match value {
            Value::String(_) => candidates::non_empty_str(value).map(str::to_string),
            _ => resolve_image(value),
        })
        .map(|url| ensure_poster(&url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discover_root_array() {
        let v = json!([{"title": "a"}]);
        assert_eq!(discover_items(&v).len(), 1);
    }

    #[test]
    fn test_discover_prefers_root_items_over_feed_items() {
        let v = json!({"items": [1], "feed": {"items": [1, 2]}});
        assert_eq!(discover_items(&v), &[json!(1)]);
    }

    #[test]
    fn test_discover_content_before_items() {
        let v = json!({"content": [], "items": [1]});
        assert!(discover_items(&v).is_empty());
    }

    #[test]
    fn test_discover_feeds_first_non_empty() {
        let v = json!({"feeds": [{"content": []}, {"items": [2]}, {"content": [3]}]});
        assert_eq!(discover_items(&v), &[json!(2)]);
    }

    #[test]
    fn test_discover_sections_first_non_empty() {
        let v = json!({"sections": [{"items": []}, {"title": "x"}, {"items": [5]}, {"items": [6]}]});
        assert_eq!(discover_items(&v), &[json!(5)]);

        let nested = json!({"feed": {"sections": [{"items": [7]}]}});
        assert_eq!(discover_items(&nested), &[json!(7)]);
    }

    #[test]
    fn test_discover_fixed_locations_in_order() {
        let cases = [
            (json!({"content": [1], "items": [2]}), 1),
            (json!({"items": [2], "feed": {"items": [3]}}), 2),
            (json!({"feed": {"items": [3], "data": {"items": [4]}}}), 3),
            (json!({"feed": {"data": {"items": [4]}}, "page": {"items": [5]}}), 4),
            (json!({"page": {"items": [5], "content": {"items": [6]}}}), 5),
            (json!({"page": {"content": {"items": [6]}}, "response": {"items": [7]}}), 6),
            (json!({"response": {"items": [7]}, "sections": [{"items": [8]}]}), 7),
        ];
        for (envelope, expected) in cases {
            assert_eq!(discover_items(&envelope), &[json!(expected)], "envelope: {envelope}");
        }
    }

    #[test]
    fn test_discover_nothing() {
        assert!(discover_items(&json!({"items": "nope"})).is_empty());
        assert!(discover_items(&json!("text")).is_empty());
        assert!(discover_items(&json!(null)).is_empty());
    }

    #[test]
    fn test_content_object_precedence() {
        let item = json!({"program": {"title": "P"}, "asset": {"title": "A"}, "content": "not-object"});
        assert_eq!(content_object(&item), &json!({"title": "P"}));
    }

    #[test]
    fn test_summary_drop_reasons() {
        assert_eq!(summary_from_item(&json!("x")), Err(ExtractError::NotAnObject));
        assert_eq!(summary_from_item(&json!({"url": "/a"})), Err(ExtractError::MissingTitle));
        assert_eq!(summary_from_item(&json!({"title": "A"})), Err(ExtractError::MissingUrl));
        assert_eq!(
            summary_from_item(&json!({"title": "A", "url": "/"})),
            Err(ExtractError::MissingUrl)
        );
    }

    #[test]
    fn test_summary_id_falls_back_to_url() {
        let summary = summary_from_item(&json!({"title": "A", "path": "/film/a"})).unwrap();
        assert_eq!(summary.id, "film/a");
    }

    #[test]
    fn test_summary_outer_item_fields() {
        let item = json!({
            "id": 99,
            "title": "Outer",
            "url": "https://play.example.com/film/outer",
            "content": {"slug": "inner-slug"},
            "image": {"src": "https://x/img?location=list"}
        });
        let summary = summary_from_item(&item).unwrap();
        assert_eq!(summary.id, "99");
        assert_eq!(summary.title, "Outer");
        assert_eq!(summary.url, "film/outer");
        assert_eq!(summary.image_url.as_deref(), Some("https://x/img?location=moviePoster"));
    }

    #[test]
    fn test_summary_structured_images() {
        let item = json!({
            "title": "A",
            "url": "a",
            "images": {"poster": [{"url": "outer-ignored"}]},
            "asset": {"images": {"default": {"href": "inner"}}}
        });
        let summary = summary_from_item(&item).unwrap();
        assert_eq!(summary.image_url.as_deref(), Some("inner"));
    }
}
