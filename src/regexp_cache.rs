// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("An error occurred while trying to create regex `{pattern}`: {source}")]
pub struct InvalidRegexError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Compiled patterns shared between rule tables.
///
/// Many countries reuse the same anchored pattern (`^(?:0[2-9])` and
/// friends), so tables compiled through one cache share a single `Regex`.
/// The cache is only written while a registry is being built.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))
            .map_err(|source| InvalidRegexError {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn same_pattern_is_compiled_once() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex("^(?:05)").unwrap();
        let second = cache.get_regex("^(?:05)").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_pattern_reports_itself() {
        let cache = RegexCache::new();
        let err = cache.get_regex("0[2-").unwrap_err();
        assert_eq!(err.pattern, "0[2-");
        assert_eq!(cache.len(), 0);
    }
}
