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

use log::trace;

use crate::{
    macros::details,
    string_util::{ascii_digits, strip_prefix_in_place},
};

use super::{
    errors::{ErrorKind, ValidationError},
    helper_constants::{INTERNATIONAL_ACCESS_PREFIX, PLUS_SIGN, VALID_PUNCTUATION},
    helper_types::NormalizedNumber,
    rule_table::{RuleTable, TrunkPrefix},
};

/// Turns raw user input into the canonical national digit string of
/// `table`'s country.
///
/// The only failure raised here is `InvalidCharacters`: which lengths and
/// prefixes are valid is country knowledge and belongs to the policy.
pub fn normalize(raw: &str, table: &RuleTable) -> Result<NormalizedNumber, ValidationError> {
    // Arabic-Indic, full-width and other Unicode decimals count as digits.
    let decimals = dec_from_char::normalize_decimals(raw);
    let input: &str = &decimals;

    check_characters(input)?;

    let mut national = ascii_digits(input);
    let had_plus = input.trim_start().starts_with(PLUS_SIGN);
    let has_country_code = strip_country_code(&mut national, table, had_plus);
    let inserted_trunk_len = reconcile_trunk(&mut national, table.trunk_prefix, has_country_code);

    trace!(
        "Normalized {:?} for {} to {} (country code: {}, trunk inserted: {})",
        raw, table.country, national, has_country_code, inserted_trunk_len > 0
    );
    Ok(NormalizedNumber {
        national,
        has_country_code,
        inserted_trunk_len,
    })
}

/// Rejects anything but digits, whitespace and `+ - ( ) .`, so letters are
/// reported instead of silently dropped.
pub(crate) fn check_characters(input: &str) -> Result<(), ValidationError> {
    match input
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_whitespace() || VALID_PUNCTUATION.contains(c)))
    {
        Some(invalid) => Err(ValidationError::new(
            ErrorKind::InvalidCharacters,
            details! { "character" => invalid },
        )),
        None => Ok(()),
    }
}

/// Removes a leading `00<CC>` or `<CC>` if enough digits remain for a
/// national number.
///
/// A bare `<CC>` is only taken for a calling code when the input started
/// with `+`, cannot be a domestic number (it lacks the mandatory trunk
/// prefix) or is too long to be one. Otherwise a domestic number that
/// happens to begin with the same digits would lose them.
fn strip_country_code(digits: &mut String, table: &RuleTable, had_plus: bool) -> bool {
    let min_remaining = table.international_length().min();

    let idd = fast_cat::concat_str!(INTERNATIONAL_ACCESS_PREFIX, table.calling_code);
    if digits.starts_with(idd.as_str()) && digits.len() - idd.len() >= min_remaining {
        return strip_prefix_in_place(digits, &idd);
    }

    let cc = table.calling_code;
    if digits.starts_with(cc)
        && digits.len() - cc.len() >= min_remaining
        && (had_plus || !could_be_domestic(digits, table) || digits.len() > max_domestic_len(table))
    {
        return strip_prefix_in_place(digits, cc);
    }
    false
}

/// Countries that omit the trunk prefix internationally always write it
/// domestically.
fn could_be_domestic(digits: &str, table: &RuleTable) -> bool {
    match table.trunk_prefix {
        TrunkPrefix::Omitted(trunk) => digits.starts_with(trunk),
        TrunkPrefix::None | TrunkPrefix::Optional(_) | TrunkPrefix::Kept(_) => true,
    }
}

fn max_domestic_len(table: &RuleTable) -> usize {
    match table.trunk_prefix {
        TrunkPrefix::Optional(trunk) => table.length.max() + trunk.len(),
        TrunkPrefix::None | TrunkPrefix::Omitted(_) | TrunkPrefix::Kept(_) => table.length.max(),
    }
}

/// Brings the trunk prefix into its canonical state. Returns the length of
/// a re-inserted trunk prefix.
fn reconcile_trunk(national: &mut String, trunk: TrunkPrefix, has_country_code: bool) -> usize {
    match trunk {
        TrunkPrefix::Omitted(prefix) if has_country_code => {
            // "+44 (0)20 ..." writes the trunk redundantly; it is dropped
            // and re-inserted like for everyone else.
            strip_prefix_in_place(national, prefix);
            national.insert_str(0, prefix);
            prefix.len()
        }
        TrunkPrefix::Optional(prefix) => {
            strip_prefix_in_place(national, prefix);
            0
        }
        TrunkPrefix::None | TrunkPrefix::Omitted(_) | TrunkPrefix::Kept(_) => 0,
    }
}
