// ABOUTME: Duration coercion for runtime fields of unknown shape.
// ABOUTME: Supports numeric seconds, numeric strings, ISO-8601 PT durations and H:MM[:SS] clocks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static ISO_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^P(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)$").expect("valid ISO duration regex")
});

static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").expect("valid clock regex"));

/// Coerces a JSON value into whole seconds.
///
/// Numbers are taken as seconds and rounded. Strings go through
/// [`parse_duration_seconds`]. Anything else, negative values, and values that do
/// not fit in `u32` yield `None`.
pub fn duration_seconds(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_f64().and_then(round_seconds),
        Value::String(s) => parse_duration_seconds(s),
        _ => None,
    }
}

/// Parses a duration string into seconds.
/// Supports:
/// - Plain numbers, possibly fractional (seconds, rounded)
/// - ISO-8601 time durations like "PT1H30M", "pt45s"
/// - H:MM:SS format
/// - M:SS format
/// Returns None if the string is blank or matches none of these.
pub fn parse_duration_seconds(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(numeric) = s.parse::<f64>() {
        if numeric.is_finite() {
            return round_seconds(numeric);
        }
    }

    if let Some(caps) = ISO_DURATION_RE.captures(s) {
        let component = |idx: usize| -> Option<u64> {
            caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
        };
        let total = component(1)?
            .saturating_mul(3600)
            .saturating_add(component(2)?.saturating_mul(60))
            .saturating_add(component(3)?);
        return u32::try_from(total).ok();
    }

    if let Some(caps) = CLOCK_RE.captures(s) {
        let first: u64 = caps[1].parse().ok()?;
        let second: u64 = caps[2].parse().ok()?;
        let total = match caps.get(3) {
            Some(third) => {
                let third: u64 = third.as_str().parse().ok()?;
                first * 3600 + second * 60 + third
            }
            None => first * 60 + second,
        };
        return u32::try_from(total).ok();
    }

    None
}

fn round_seconds(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}

/// Renders seconds for display, e.g. "1 h 5 min", "45 min" or "30 s".
///
/// Seconds are shown only when the duration is shorter than a minute.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{hours} h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} min"));
    }
    if parts.is_empty() {
        parts.push(format!("{secs} s"));
    }
    parts.join(" ")
}
