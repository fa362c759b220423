// ABOUTME: Core normalization library for playfeed.
// ABOUTME: Maps schema-varying catalog and detail JSON into stable Summary and Details records.

pub mod candidates;
pub mod details;
pub mod duration_parse;
pub mod error;
pub mod extract;
pub mod image_utils;
pub mod models;
pub mod path_utils;

pub use details::normalize_details;
pub use duration_parse::{duration_seconds, format_duration, parse_duration_seconds};
pub use error::ExtractError;
pub use extract::{
    content_object, discover_items, extract_summaries, summary_from_item, CatalogExtraction,
};
pub use image_utils::{ensure_poster, resolve_image};
pub use models::{Details, Fallback, Summary, UNKNOWN_TITLE};
pub use path_utils::normalize_path;
