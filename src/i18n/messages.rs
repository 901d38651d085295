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

use crate::phonevalidator::errors::{Details, ErrorKind};

/// Renders the English message for `kind`, filling in whatever `details`
/// provide.
///
/// Total over every kind and every details shape: a missing key only drops
/// the sentence part that would have used it.
pub fn get_message(kind: ErrorKind, details: &Details) -> String {
    match kind {
        ErrorKind::InvalidCharacters => match details.text("character") {
            Some(c) => format!("Phone number contains an invalid character '{}'", c),
            None => "Phone number contains invalid characters".to_owned(),
        },
        ErrorKind::TooShort => match (details.number("min"), details.number("max")) {
            (Some(min), Some(max)) => with_got(
                format!("Phone number must have between {} and {} digits", min, max),
                details,
            ),
            _ => match details.number("expected") {
                Some(expected) => with_got(
                    format!("Phone number is too short: expected at least {} digits", expected),
                    details,
                ),
                None => "Phone number is too short".to_owned(),
            },
        },
        ErrorKind::TooLong => match details.number("expected") {
            Some(expected) => with_got(
                format!("Phone number is too long: expected at most {} digits", expected),
                details,
            ),
            None => "Phone number is too long".to_owned(),
        },
        ErrorKind::MissingLeadingZero => match details.text("expected") {
            Some(trunk) => format!("Phone number must start with {}", trunk),
            None => "Phone number must start with 0".to_owned(),
        },
        ErrorKind::InvalidPrefix => prefix_message("Invalid phone number prefix", details),
        ErrorKind::InvalidMobilePrefix => prefix_message("Invalid mobile prefix", details),
        ErrorKind::InvalidAreaCode => prefix_message("Invalid area code", details),
        ErrorKind::InvalidExchangeCode => match details.text("got") {
            Some(got) => format!("Invalid exchange code {}", got),
            None => "Invalid exchange code".to_owned(),
        },
        ErrorKind::InvalidFormat => {
            let country = details.text("country");
            match (details.text("type"), country) {
                (Some(number_type), Some(country)) => {
                    format!("Invalid {} number format for {}", number_type, country)
                }
                (None, Some(country)) => match details.get("accepted_lengths") {
                    Some(lengths) => format!(
                        "Invalid phone number format for {}: accepted lengths are {}",
                        country, lengths
                    ),
                    None => format!("Invalid phone number format for {}", country),
                },
                _ => "Invalid phone number format".to_owned(),
            }
        }
        ErrorKind::UnsupportedCountry => match details.text("country") {
            Some(country) => format!("Country '{}' is not supported", country),
            None => "Country is not supported".to_owned(),
        },
    }
}

fn with_got(mut message: String, details: &Details) -> String {
    if let Some(got) = details.number("got") {
        message.push_str(", got ");
        message.push_str(itoa::Buffer::new().format(got));
    }
    message
}

fn prefix_message(head: &str, details: &Details) -> String {
    let mut message = head.to_owned();
    if let Some(got) = details.text("got") {
        message.push(' ');
        message.push_str(got);
    }
    if let Some(valid) = details.get("valid_prefixes") {
        message.push_str(". Valid prefixes are: ");
        message.push_str(&valid.to_string());
    }
    message
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::get_message;
    use crate::phonevalidator::errors::{Details, ErrorKind};

    #[test]
    fn every_kind_renders_without_details() {
        for kind in ErrorKind::iter() {
            assert!(!get_message(kind, &Details::new()).is_empty(), "{kind}");
        }
    }

    #[test]
    fn length_messages_use_details() {
        let details = Details::new().with("expected", 10usize).with("got", 7usize);
        assert_eq!(
            get_message(ErrorKind::TooShort, &details),
            "Phone number is too short: expected at least 10 digits, got 7"
        );
        let details = Details::new()
            .with("min", 7usize)
            .with("max", 15usize)
            .with("got", 16usize);
        assert_eq!(
            get_message(ErrorKind::TooShort, &details),
            "Phone number must have between 7 and 15 digits, got 16"
        );
    }

    #[test]
    fn prefix_message_lists_valid_prefixes() {
        let valid: &[&str] = &["050", "052"];
        let details = Details::new().with("valid_prefixes", valid).with("got", "057");
        assert_eq!(
            get_message(ErrorKind::InvalidMobilePrefix, &details),
            "Invalid mobile prefix 057. Valid prefixes are: 050, 052"
        );
    }

    #[test]
    fn format_message_names_type_and_country() {
        let details = Details::new()
            .with("country", "France")
            .with("type", "toll-free");
        assert_eq!(
            get_message(ErrorKind::InvalidFormat, &details),
            "Invalid toll-free number format for France"
        );
    }
}
