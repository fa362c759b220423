// ABOUTME: Image url resolution for the many shapes upstream imagery takes.
// ABOUTME: Handles bare strings, {url|href} objects, rendition arrays, keyed variant maps and poster crops.

use serde_json::Value;

use crate::candidates::non_empty_str;

/// Variant keys tried, in order, when images arrive as a keyed map.
pub const IMAGE_VARIANT_KEYS: &[&str] = &["poster", "portrait", "list", "default", "landscape"];

const LIST_LOCATION: &str = "location=list";
const POSTER_LOCATION: &str = "location=moviePoster";

/// Resolves an arbitrarily shaped image field into a single url.
///
/// The direct value is tried first (a string or an object with `url`/`href`),
/// then each entry of [`IMAGE_VARIANT_KEYS`], then the value itself as a
/// collection of renditions.
pub fn resolve_image(value: &Value) -> Option<String> {
    if let Some(url) = image_from_value(value) {
        return Some(url.to_string());
    }

    if let Some(map) = value.as_object() {
        for key in IMAGE_VARIANT_KEYS {
            if let Some(url) = map.get(*key).and_then(image_from_entry) {
                return Some(url.to_string());
            }
        }
    }

    image_from_collection(value).map(str::to_string)
}

/// Rewrites a list-cropped CDN url to request the poster crop instead.
///
/// Only the `location=list` token changes; urls without it pass through.
pub fn ensure_poster(url: &str) -> String {
    url.replacen(LIST_LOCATION, POSTER_LOCATION, 1)
}

/// A bare string, or an object exposing `url` then `href`.
fn image_from_value(value: &Value) -> Option<&str> {
    match value {
        Value::String(_) => non_empty_str(value),
        Value::Object(map) => ["url", "href"]
            .iter()
            .find_map(|key| map.get(*key).and_then(non_empty_str)),
        _ => None,
    }
}

/// The first usable rendition in an array.
fn image_from_collection(value: &Value) -> Option<&str> {
    value.as_array()?.iter().find_map(image_from_value)
}

/// A single variant slot, which may hold either one rendition or several.
fn image_from_entry(value: &Value) -> Option<&str> {
    image_from_value(value).or_else(|| image_from_collection(value))
}
