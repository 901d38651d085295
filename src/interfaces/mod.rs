use crate::phonevalidator::errors::ValidationResult;

/// A validator for the phone numbers of one country (or of no country in
/// particular, for the generic fallback).
///
/// The registry hands out `&dyn PhonePolicy` so callers do not care
/// whether a country-specific table or the fallback answered.
pub trait PhonePolicy: Send + Sync {
    /// Name used in messages, e.g. `"United Arab Emirates"`.
    fn country_name(&self) -> &str;

    /// Validates `phone_number` as written by a user. Never panics; every
    /// input yields a result.
    fn validate(&self, phone_number: &str) -> ValidationResult;
}
