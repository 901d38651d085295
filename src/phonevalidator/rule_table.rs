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

//! Declarative per-country numbering rules.
//!
//! A [`RuleTable`] is plain data: every pattern is a `&'static str` and the
//! tables in `crate::countries` are `const` items. Compiling a table into a
//! [`CountryPolicy`](super::country_policy::CountryPolicy) is the only step
//! that touches `regex`.

use crate::i18n::CountryCode;

use super::{enums::NumberType, errors::ErrorKind};

/// Accepted digit count of a national number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsnLength {
    Exact(usize),
    Range { min: usize, max: usize },
}

impl NsnLength {
    pub fn min(self) -> usize {
        match self {
            NsnLength::Exact(n) => n,
            NsnLength::Range { min, .. } => min,
        }
    }

    pub fn max(self) -> usize {
        match self {
            NsnLength::Exact(n) => n,
            NsnLength::Range { max, .. } => max,
        }
    }

    pub fn contains(self, len: usize) -> bool {
        self.min() <= len && len <= self.max()
    }
}

/// How the domestic trunk prefix relates to the international form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrunkPrefix {
    /// The country has no trunk prefix.
    None,
    /// Written domestically, dropped after `+CC` (UK, France, Germany,
    /// UAE...). Re-inserted after a country code is stripped, and required
    /// in domestic form.
    Omitted(&'static str),
    /// May be written domestically but is not part of the number. Stripped
    /// whenever present.
    Optional(&'static str),
    /// Part of the number in both forms (Italian landlines).
    Kept(&'static str),
}

/// Whitelist of finer prefixes inside a class, e.g. the UAE mobile
/// operators `050, 052, ...` inside the broader `05` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubPrefixRule {
    pub allowed: &'static [&'static str],
    /// Reported when no allowed prefix matches; `InvalidMobilePrefix` or
    /// `InvalidAreaCode`.
    pub kind: ErrorKind,
}

/// A positional sub-field check, such as the NANP exchange code in digits
/// 4 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRule {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub pattern: &'static str,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRule {
    pub number_type: NumberType,
    /// Matched at the start of the canonical number; decides the class.
    pub leading: &'static str,
    /// What `leading` accepts, spelled out for error details. Counted from
    /// the table's `prefix_start`.
    pub valid_prefixes: &'static [&'static str],
    pub sub_prefixes: Option<SubPrefixRule>,
    pub segments: &'static [SegmentRule],
    /// Must match the whole canonical number.
    pub pattern: &'static str,
}

/// One accepted shape of a country with several coexisting numbering plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub number_type: NumberType,
    pub length: usize,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRules {
    /// Class rules tried in declaration order. `unmatched` is reported when
    /// no leading pattern matches.
    Classes {
        rules: &'static [ClassRule],
        unmatched: ErrorKind,
        /// Offset of the class prefix in the canonical number; non-zero
        /// where an area code comes first (Brazil).
        prefix_start: usize,
    },
    /// A single pattern over the whole canonical number.
    Pattern(&'static str),
    /// Alternative shapes tried in order; anything else is rejected.
    Shapes(&'static [Shape]),
}

/// The numbering rules of one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    pub country: CountryCode,
    pub country_name: &'static str,
    /// Country calling code without `+` or `00`, e.g. `"971"`.
    pub calling_code: &'static str,
    pub trunk_prefix: TrunkPrefix,
    /// Bounds of the number as dialed domestically.
    pub length: NsnLength,
    /// Bounds of the digits following a detected country code. Defaults to
    /// `length` when the international form has the same digits.
    pub international_length: Option<NsnLength>,
    pub format: FormatRules,
}

impl RuleTable {
    pub fn international_length(&self) -> NsnLength {
        self.international_length.unwrap_or(self.length)
    }

    /// Every valid prefix of every class, in declaration order.
    pub(crate) fn valid_prefixes(&self) -> Vec<String> {
        match self.format {
            FormatRules::Classes { rules, .. } => rules
                .iter()
                .flat_map(|rule| rule.valid_prefixes.iter())
                .map(|prefix| (*prefix).to_owned())
                .collect(),
            FormatRules::Pattern(_) | FormatRules::Shapes(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NsnLength;

    #[test]
    fn length_bounds() {
        let exact = NsnLength::Exact(10);
        assert!(exact.contains(10));
        assert!(!exact.contains(9));

        let range = NsnLength::Range { min: 9, max: 10 };
        assert_eq!((range.min(), range.max()), (9, 10));
        assert!(range.contains(9) && range.contains(10));
        assert!(!range.contains(11));
    }
}
