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

use std::fmt;

use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::{i18n::{self, CountryCode}, regexp_cache::InvalidRegexError};

/// Outcome of validating a single phone number.
///
/// `Ok(())` carries nothing else: a valid number has no error code, message
/// or details. A failure is data, never a panic, so UI code can branch on
/// [`ValidationError::kind`] directly.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// The reason a phone number was rejected.
///
/// Checks run in a fixed order (characters, length, leading zero, prefix
/// class, sub-prefix, segment, full pattern) and the first one that fails
/// decides the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The input contains something other than digits, `+`, whitespace,
    /// `-`, `(`, `)` or `.`.
    InvalidCharacters,
    /// Fewer digits than the shortest number of the country.
    TooShort,
    /// More digits than the longest number of the country.
    TooLong,
    /// A domestic number of a country whose numbers are written with a
    /// trunk `0` lacks it.
    MissingLeadingZero,
    /// The number does not start with any prefix known for the country.
    InvalidPrefix,
    /// The number starts like a mobile number but the operator prefix is not
    /// assigned.
    InvalidMobilePrefix,
    /// The area code is not assigned.
    InvalidAreaCode,
    /// The exchange (central office) code is not assigned.
    InvalidExchangeCode,
    /// Prefix and length are fine, but the digits do not form a number of
    /// the declared type.
    InvalidFormat,
    /// No rules are registered for the requested country.
    UnsupportedCountry,
}

impl ErrorKind {
    /// Stable code for programmatic branching and i18n lookups, e.g.
    /// `"TOO_SHORT"`.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single context value attached to a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

impl DetailValue {
    pub fn as_number(&self) -> Option<usize> {
        match self {
            DetailValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DetailValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DetailValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Number(n) => f.write_str(itoa::Buffer::new().format(*n)),
            DetailValue::Text(s) => f.write_str(s),
            DetailValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<usize> for DetailValue {
    fn from(value: usize) -> Self {
        DetailValue::Number(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_owned())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::Text(value)
    }
}

impl From<char> for DetailValue {
    fn from(value: char) -> Self {
        DetailValue::Text(value.to_string())
    }
}

impl From<&[&str]> for DetailValue {
    fn from(value: &[&str]) -> Self {
        DetailValue::List(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<Vec<String>> for DetailValue {
    fn from(value: Vec<String>) -> Self {
        DetailValue::List(value)
    }
}

/// Structured context of a validation error, e.g. `expected: 10, got: 7`.
///
/// Keys keep insertion order; a policy attaches at most a handful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(Vec<(&'static str, DetailValue)>);

impl Details {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `key`, replacing an earlier value under the same key.
    pub fn with(mut self, key: &'static str, value: impl Into<DetailValue>) -> Self {
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn number(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(DetailValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(DetailValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &DetailValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Why a phone number is invalid: exactly one [`ErrorKind`], a rendered
/// message for direct display and the details it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
    details: Details,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, details: Details) -> Self {
        let message = i18n::get_message(kind, &details);
        Self {
            kind,
            message,
            details,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Details {
        &self.details
    }
}

/// Errors raised while compiling rule tables into a registry.
#[derive(Debug, PartialEq, Error)]
pub enum RegistryError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
    #[error("Rule table for `{country}` has length bounds {min}..={max}")]
    InvalidLengthBounds {
        country: CountryCode,
        min: usize,
        max: usize,
    },
    #[error("Rule table for `{0}` declares no class rules or shapes")]
    EmptyRules(CountryCode),
}
