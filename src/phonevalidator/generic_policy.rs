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

use crate::{interfaces::PhonePolicy, macros::details, string_util::ascii_digits};

use super::{
    errors::{ErrorKind, ValidationError, ValidationResult},
    helper_constants::{GENERIC_MAX_LENGTH, GENERIC_MIN_LENGTH},
};

/// Permissive fallback for countries without a rule table: a digit count
/// in `min..=max` that is not all zeros.
///
/// Accepts numbers a real country table might reject. There is no
/// character check; Unicode decimals are mapped to ASCII and everything
/// else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericPolicy {
    min_len: usize,
    max_len: usize,
}

impl GenericPolicy {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for GenericPolicy {
    fn default() -> Self {
        Self::new(GENERIC_MIN_LENGTH, GENERIC_MAX_LENGTH)
    }
}

impl PhonePolicy for GenericPolicy {
    fn country_name(&self) -> &str {
        "Unknown"
    }

    fn validate(&self, phone_number: &str) -> ValidationResult {
        let digits = ascii_digits(&dec_from_char::normalize_decimals(phone_number));
        let got = digits.len();
        // Both bounds are reported as TOO_SHORT.
        if got < self.min_len || got > self.max_len {
            return Err(ValidationError::new(
                ErrorKind::TooShort,
                details! { "min" => self.min_len, "max" => self.max_len, "got" => got },
            ));
        }
        if digits.bytes().all(|b| b == b'0') {
            return Err(ValidationError::new(ErrorKind::InvalidFormat, details! {}));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GenericPolicy;
    use crate::{interfaces::PhonePolicy, phonevalidator::errors::ErrorKind};

    #[test]
    fn length_range() {
        let policy = GenericPolicy::default();
        assert!(policy.validate("1234567").is_ok());
        assert!(policy.validate("123456789012345").is_ok());
        assert!(policy.validate("+1 (234) 567-890").is_ok());

        let err = policy.validate("123456").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooShort);
        assert_eq!(err.details().number("got"), Some(6));

        let err = policy.validate("1234567890123456").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooShort);
        assert_eq!(err.details().number("max"), Some(15));
    }

    #[test]
    fn letters_are_dropped_not_rejected() {
        assert!(GenericPolicy::default().validate("call 555 123 4567").is_ok());
    }

    #[test]
    fn unicode_decimals_are_counted() {
        let policy = GenericPolicy::default();
        assert!(policy.validate("٠٥٠١٢٣٤٥٦٧").is_ok());
        assert!(policy.validate("０５０１２３４５６７").is_ok());
        assert_eq!(policy.validate("٠٠٠٠٠٠٠").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn all_zero_is_rejected() {
        let err = GenericPolicy::default().validate("000-000-0000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn custom_bounds() {
        let policy = GenericPolicy::new(4, 6);
        assert!(policy.validate("1234").is_ok());
        assert_eq!(policy.validate("1234567").unwrap_err().kind(), ErrorKind::TooShort);
    }
}
