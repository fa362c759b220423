// ABOUTME: Normalized record types handed to presentation code.
// ABOUTME: Summary describes one catalog entry; Details extends it with description and runtime.

use serde::{Deserialize, Serialize};

/// Title used when neither the detail document nor the fallback names the title.
pub const UNKNOWN_TITLE: &str = "Untitled";

/// A single catalog entry.
///
/// `id` and `url` are never empty for a summary produced by the extractor;
/// `url` is a canonical path (see [`crate::normalize_path`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Full record for one title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// The duration exactly as the upstream sent it, kept even when it could not be parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_duration: Option<String>,
}

impl Details {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    pub fn url(&self) -> &str {
        &self.summary.url
    }

    pub fn image_url(&self) -> Option<&str> {
        self.summary.image_url.as_deref()
    }
}

impl From<Summary> for Details {
    fn from(summary: Summary) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}

/// Previously obtained record used to fill gaps in a detail document.
#[derive(Debug, Clone, Copy, Default)]
pub enum Fallback<'a> {
    #[default]
    None,
    Summary(&'a Summary),
    Details(&'a Details),
}

impl<'a> Fallback<'a> {
    pub fn summary(&self) -> Option<&'a Summary> {
        match *self {
            Fallback::None => None,
            Fallback::Summary(summary) => Some(summary),
            Fallback::Details(details) => Some(&details.summary),
        }
    }

    /// Only a fallback that is itself a Details record can carry a description.
    pub fn description(&self) -> Option<&'a str> {
        match *self {
            Fallback::Details(details) => details.description.as_deref(),
            _ => None,
        }
    }
}

impl<'a> From<&'a Summary> for Fallback<'a> {
    fn from(summary: &'a Summary) -> Self {
        Fallback::Summary(summary)
    }
}

impl<'a> From<&'a Details> for Fallback<'a> {
    fn from(details: &'a Details) -> Self {
        Fallback::Details(details)
    }
}

impl<'a> From<Option<&'a Summary>> for Fallback<'a> {
    fn from(summary: Option<&'a Summary>) -> Self {
        summary.map_or(Fallback::None, Fallback::Summary)
    }
}
