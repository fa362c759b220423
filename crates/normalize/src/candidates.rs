// ABOUTME: Ordered, lazily evaluated field lookups over loosely typed JSON.
// ABOUTME: Each field's precedence is a plain list of paths tried until one yields a value.

use serde_json::Value;

/// A location inside a JSON value, given as a sequence of object keys.
pub type FieldPath = &'static [&'static str];

/// Follows `path` through nested objects. Non-object intermediate values stop the walk.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Returns the value at `path` if it is a string with visible content.
pub fn string_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path).and_then(non_empty_str)
}

/// Returns the value at `path` if it is an array.
pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    lookup(value, path).and_then(Value::as_array)
}

/// A string that is not empty after trimming.
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

/// Identifier-like value: a non-empty string or an integer rendered in decimal.
pub fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Ordered candidate paths evaluated against a single root.
#[derive(Debug, Clone, Copy)]
pub struct Candidates {
    paths: &'static [FieldPath],
}

impl Candidates {
    pub const fn new(paths: &'static [FieldPath]) -> Self {
        Self { paths }
    }

    /// First path whose value passes `accept`, in declaration order.
    pub fn first<'a, T>(
        &self,
        root: &'a Value,
        accept: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        self.paths
            .iter()
            .find_map(|path| lookup(root, path).and_then(&accept))
    }

    /// First non-empty string.
    pub fn first_str<'a>(&self, root: &'a Value) -> Option<&'a str> {
        self.first(root, non_empty_str)
    }

    /// First value that is present and not null, whatever its type.
    pub fn first_present<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.first(root, |v| (!v.is_null()).then_some(v))
    }
}

/// Candidate lookups that span two roots (a content object and its enclosing item).
///
/// Each entry is tried in order against the root it names, so precedence can
/// interleave fields of the inner and outer object.
#[derive(Debug, Clone, Copy)]
pub struct ScopedCandidates {
    entries: &'static [(Scope, FieldPath)],
}

/// Which object a scoped candidate reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Content,
    Item,
}

impl ScopedCandidates {
    pub const fn new(entries: &'static [(Scope, FieldPath)]) -> Self {
        Self { entries }
    }

    pub fn first<'a, T>(
        &self,
        content: &'a Value,
        item: &'a Value,
        accept: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        self.entries.iter().find_map(|(scope, path)| {
            let root = match scope {
                Scope::Content => content,
                Scope::Item => item,
            };
            lookup(root, path).and_then(&accept)
        })
    }

    pub fn first_str<'a>(&self, content: &'a Value, item: &'a Value) -> Option<&'a str> {
        self.first(content, item, non_empty_str)
    }
}
