//! Regex rewrite of relative paths before snapshot lookup.

use crate::EngineResult;
use regex::Regex;
use std::borrow::Cow;

/// A find/replace applied to a target file's relative path during replay.
///
/// Lets a target tree whose names differ systematically from the collected
/// tree still match, e.g. `\.jpeg$` → `.jpg`.
#[derive(Debug, Clone)]
pub struct PathRewrite {
    pattern: Regex,
    replacement: String,
}

impl PathRewrite {
    /// Compile a rewrite.
    ///
    /// Returns `Ok(None)` when either the pattern or the replacement is
    /// empty, which disables rewriting.
    pub fn new(pattern: &str, replacement: &str) -> EngineResult<Option<Self>> {
        if pattern.is_empty() || replacement.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        }))
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// The replacement may reference capture groups as `$1` or `${name}`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Apply `pattern` → `replacement` to `text` once.
///
/// An empty pattern or replacement returns `text` unchanged.
pub fn rewrite(text: &str, pattern: &str, replacement: &str) -> EngineResult<String> {
    Ok(match PathRewrite::new(pattern, replacement)? {
        Some(rewrite) => rewrite.apply(text).into_owned(),
        None => text.to_string(),
    })
}
