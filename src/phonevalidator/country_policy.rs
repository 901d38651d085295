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

use log::trace;
use regex::Regex;

use crate::{
    i18n::CountryCode,
    interfaces::PhonePolicy,
    macros::details,
    regex_util::{anchor_full, anchor_start},
    regexp_cache::RegexCache,
};

use super::{
    errors::{ErrorKind, RegistryError, ValidationError, ValidationResult},
    helper_types::NormalizedNumber,
    normalizer::normalize,
    rule_table::{ClassRule, FormatRules, NsnLength, RuleTable, SegmentRule, Shape, TrunkPrefix},
};

struct CompiledClassRule {
    rule: ClassRule,
    leading: Arc<Regex>,
    segments: Vec<(SegmentRule, Arc<Regex>)>,
    pattern: Arc<Regex>,
}

enum CompiledFormat {
    Classes {
        rules: Vec<CompiledClassRule>,
        unmatched: ErrorKind,
        prefix_start: usize,
    },
    Pattern(Arc<Regex>),
    Shapes(Vec<(Shape, Arc<Regex>)>),
}

/// A [`RuleTable`] compiled into a validator.
///
/// Every country runs the same pipeline: normalize, check the length,
/// check the leading zero, then match class rules. Only the table differs.
pub struct CountryPolicy {
    table: RuleTable,
    format: CompiledFormat,
}

impl CountryPolicy {
    /// Compiles a single table, e.g. `CountryPolicy::new(countries::DE)`,
    /// for callers that want to bypass the registry.
    pub fn new(table: RuleTable) -> Result<Self, RegistryError> {
        Self::compile(table, &RegexCache::with_capacity(16))
    }

    pub(crate) fn compile(table: RuleTable, cache: &RegexCache) -> Result<Self, RegistryError> {
        check_bounds(table.country, table.length)?;
        check_bounds(table.country, table.international_length())?;

        let full = |pattern: &str| cache.get_regex(&anchor_full(pattern));
        let format = match table.format {
            FormatRules::Classes {
                rules,
                unmatched,
                prefix_start,
            } => {
                if rules.is_empty() {
                    return Err(RegistryError::EmptyRules(table.country));
                }
                let mut compiled = Vec::with_capacity(rules.len());
                for rule in rules {
                    let segments = rule
                        .segments
                        .iter()
                        .map(|segment| -> Result<_, RegistryError> {
                            Ok((*segment, full(segment.pattern)?))
                        })
                        .collect::<Result<Vec<_>, RegistryError>>()?;
                    compiled.push(CompiledClassRule {
                        rule: *rule,
                        leading: cache.get_regex(&anchor_start(rule.leading))?,
                        segments,
                        pattern: full(rule.pattern)?,
                    });
                }
                CompiledFormat::Classes {
                    rules: compiled,
                    unmatched,
                    prefix_start,
                }
            }
            FormatRules::Pattern(pattern) => CompiledFormat::Pattern(full(pattern)?),
            FormatRules::Shapes(shapes) => {
                if shapes.is_empty() {
                    return Err(RegistryError::EmptyRules(table.country));
                }
                CompiledFormat::Shapes(
                    shapes
                        .iter()
                        .map(|shape| -> Result<_, RegistryError> {
                            Ok((*shape, full(shape.pattern)?))
                        })
                        .collect::<Result<Vec<_>, RegistryError>>()?,
                )
            }
        };
        Ok(Self { table, format })
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn country(&self) -> CountryCode {
        self.table.country
    }

    fn check_length(&self, number: &NormalizedNumber) -> ValidationResult {
        let bounds = if number.has_country_code {
            self.table.international_length()
        } else {
            self.table.length
        };
        let got = number.dialed_len();
        if got < bounds.min() {
            return Err(ValidationError::new(
                ErrorKind::TooShort,
                details! { "expected" => bounds.min(), "got" => got },
            ));
        }
        if got > bounds.max() {
            return Err(ValidationError::new(
                ErrorKind::TooLong,
                details! { "expected" => bounds.max(), "got" => got },
            ));
        }
        Ok(())
    }

    fn check_leading_zero(&self, number: &NormalizedNumber) -> ValidationResult {
        if let TrunkPrefix::Omitted(trunk) = self.table.trunk_prefix {
            if !number.has_country_code && !number.national.starts_with(trunk) {
                return Err(ValidationError::new(
                    ErrorKind::MissingLeadingZero,
                    details! { "expected" => trunk },
                ));
            }
        }
        Ok(())
    }

    fn check_format(&self, national: &str) -> ValidationResult {
        match &self.format {
            CompiledFormat::Classes {
                rules,
                unmatched,
                prefix_start,
            } => self.check_classes(rules, *unmatched, *prefix_start, national),
            CompiledFormat::Pattern(pattern) => {
                if pattern.is_match(national) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        ErrorKind::InvalidFormat,
                        details! { "country" => self.table.country_name },
                    ))
                }
            }
            CompiledFormat::Shapes(shapes) => {
                let matched = shapes.iter().find(|(shape, pattern)| {
                    shape.length == national.len() && pattern.is_match(national)
                });
                if let Some((shape, _)) = matched {
                    trace!("{} matched {} shape", national, shape.number_type.label());
                    return Ok(());
                }
                let accepted_lengths: Vec<String> = shapes
                    .iter()
                    .map(|(shape, _)| itoa::Buffer::new().format(shape.length).to_owned())
                    .collect();
                Err(ValidationError::new(
                    ErrorKind::InvalidFormat,
                    details! {
                        "country" => self.table.country_name,
                        "accepted_lengths" => accepted_lengths,
                    },
                ))
            }
        }
    }

    fn check_classes(
        &self,
        rules: &[CompiledClassRule],
        unmatched: ErrorKind,
        prefix_start: usize,
        national: &str,
    ) -> ValidationResult {
        // The first matching leading pattern fixes the type, even if the
        // number fails later on.
        let Some(class) = rules.iter().find(|class| class.leading.is_match(national)) else {
            let valid_prefixes = self.table.valid_prefixes();
            let got_len = valid_prefixes.iter().map(String::len).min().unwrap_or(1);
            return Err(ValidationError::new(
                unmatched,
                details! {
                    "valid_prefixes" => valid_prefixes,
                    "got" => head(national.get(prefix_start..).unwrap_or(""), got_len),
                },
            ));
        };
        let rule = &class.rule;

        if let Some(sub_prefixes) = rule.sub_prefixes {
            if !sub_prefixes.allowed.iter().any(|prefix| national.starts_with(prefix)) {
                let got_len = sub_prefixes.allowed.iter().map(|p| p.len()).max().unwrap_or(1);
                return Err(ValidationError::new(
                    sub_prefixes.kind,
                    details! {
                        "valid_prefixes" => sub_prefixes.allowed,
                        "got" => head(national, got_len),
                    },
                ));
            }
        }

        for (segment, pattern) in &class.segments {
            // A number too short for the segment fails the full pattern below.
            if let Some(digits) = national.get(segment.start..segment.end) {
                if !pattern.is_match(digits) {
                    return Err(ValidationError::new(
                        segment.kind,
                        details! { "segment" => segment.name, "got" => digits },
                    ));
                }
            }
        }

        if !class.pattern.is_match(national) {
            return Err(ValidationError::new(
                ErrorKind::InvalidFormat,
                details! {
                    "country" => self.table.country_name,
                    "type" => rule.number_type.label(),
                },
            ));
        }
        Ok(())
    }
}

impl PhonePolicy for CountryPolicy {
    fn country_name(&self) -> &str {
        self.table.country_name
    }

    fn validate(&self, phone_number: &str) -> ValidationResult {
        let result = normalize(phone_number, &self.table).and_then(|number| {
            self.check_length(&number)?;
            self.check_leading_zero(&number)?;
            self.check_format(&number.national)
        });
        if let Err(err) = &result {
            trace!(
                "{} rejected {:?}: {}",
                self.table.country,
                phone_number,
                err.code()
            );
        }
        result
    }
}

fn check_bounds(country: CountryCode, length: NsnLength) -> Result<(), RegistryError> {
    if length.min() > length.max() {
        return Err(RegistryError::InvalidLengthBounds {
            country,
            min: length.min(),
            max: length.max(),
        });
    }
    Ok(())
}

/// First `len` digits of `national`, or all of them if it is shorter.
fn head(national: &str, len: usize) -> &str {
    &national[..len.min(national.len())]
}

#[cfg(test)]
mod tests {
    use super::CountryPolicy;
    use crate::{
        i18n::CountryCode,
        interfaces::PhonePolicy,
        phonevalidator::{
            enums::NumberType,
            errors::{ErrorKind, RegistryError},
            rule_table::{ClassRule, FormatRules, NsnLength, RuleTable, Shape, TrunkPrefix},
        },
    };

    const BROKEN: &[ClassRule] = &[ClassRule {
        number_type: NumberType::Mobile,
        leading: "0[5",
        valid_prefixes: &["05"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"05\d{8}",
    }];

    fn table(length: NsnLength, format: FormatRules) -> RuleTable {
        RuleTable {
            country: CountryCode::Ae,
            country_name: "Test",
            calling_code: "971",
            trunk_prefix: TrunkPrefix::None,
            length,
            international_length: None,
            format,
        }
    }

    #[test]
    fn invalid_regex_fails_compilation() {
        let result = CountryPolicy::new(table(
            NsnLength::Exact(10),
            FormatRules::Classes {
                rules: BROKEN,
                unmatched: ErrorKind::InvalidPrefix,
                prefix_start: 0,
            },
        ));
        assert!(matches!(result, Err(RegistryError::InvalidRegex(_))));
    }

    #[test]
    fn inverted_bounds_fail_compilation() {
        let result = CountryPolicy::new(table(
            NsnLength::Range { min: 10, max: 9 },
            FormatRules::Pattern(r"\d+"),
        ));
        assert_eq!(
            result.err(),
            Some(RegistryError::InvalidLengthBounds {
                country: CountryCode::Ae,
                min: 10,
                max: 9,
            })
        );
    }

    #[test]
    fn empty_rule_lists_fail_compilation() {
        let result = CountryPolicy::new(table(NsnLength::Exact(6), FormatRules::Shapes(&[])));
        assert_eq!(result.err(), Some(RegistryError::EmptyRules(CountryCode::Ae)));

        let result = CountryPolicy::new(table(
            NsnLength::Exact(6),
            FormatRules::Classes {
                rules: &[],
                unmatched: ErrorKind::InvalidPrefix,
                prefix_start: 0,
            },
        ));
        assert_eq!(result.err(), Some(RegistryError::EmptyRules(CountryCode::Ae)));
    }

    #[test]
    fn shape_must_match_length_and_pattern() {
        const SHAPES: &[Shape] = &[
            Shape {
                number_type: NumberType::FixedLine,
                length: 6,
                pattern: r"\d{6}",
            },
            Shape {
                number_type: NumberType::Mobile,
                length: 8,
                pattern: r"6\d{7}",
            },
        ];
        let policy = CountryPolicy::new(table(
            NsnLength::Range { min: 6, max: 8 },
            FormatRules::Shapes(SHAPES),
        ))
        .unwrap();
        assert!(policy.validate("123456").is_ok());
        assert!(policy.validate("61234567").is_ok());

        let err = policy.validate("1234567").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(
            err.details().get("accepted_lengths").map(ToString::to_string).as_deref(),
            Some("6, 8")
        );
        assert_eq!(policy.validate("51234567").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }
}
