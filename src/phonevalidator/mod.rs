mod helper_constants;
mod helper_types;
mod normalizer;
pub mod country_policy;
pub mod enums;
pub mod errors;
pub mod generic_policy;
pub mod phonevalidator;
pub mod rule_table;

use std::sync::LazyLock;

pub use enums::NumberType;
pub use errors::{DetailValue, Details, ErrorKind, RegistryError, ValidationError, ValidationResult};
pub use helper_types::NormalizedNumber;
pub use normalizer::normalize;

use crate::phonevalidator::phonevalidator::PhoneValidator;

pub static PHONE_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(|| {
    PhoneValidator::new()
});

/// Validates `phone_number` with the rules of `country_code` (ISO 3166-1
/// alpha-2, any case). Countries without rules yield `UNSUPPORTED_COUNTRY`.
pub fn validate_phone(country_code: &str, phone_number: &str) -> ValidationResult {
    PHONE_VALIDATOR.validate(country_code, phone_number)
}

/// Like [`validate_phone`], but countries without rules get the generic
/// length check unless `strict` is set.
pub fn validate_phone_with_fallback(
    country_code: &str,
    phone_number: &str,
    strict: bool,
) -> ValidationResult {
    PHONE_VALIDATOR.validate_with_fallback(country_code, phone_number, strict)
}
