pub mod countries;
pub mod i18n;
pub mod interfaces;
pub mod phonevalidator;
mod regexp_cache;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small macros for the boilerplate every check repeats, named after what
/// they build.
mod macros;

#[cfg(test)]
mod tests;

pub use i18n::{get_message, CountryCode};
pub use interfaces::PhonePolicy;
pub use phonevalidator::{
    country_policy::CountryPolicy,
    generic_policy::GenericPolicy,
    phonevalidator::{PhoneValidator, PhoneValidatorBuilder},
    rule_table::{
        ClassRule, FormatRules, NsnLength, RuleTable, SegmentRule, Shape, SubPrefixRule,
        TrunkPrefix,
    },
    validate_phone, validate_phone_with_fallback, DetailValue, Details, ErrorKind, NumberType,
    RegistryError, ValidationError, ValidationResult, PHONE_VALIDATOR,
};
pub use regexp_cache::InvalidRegexError;
