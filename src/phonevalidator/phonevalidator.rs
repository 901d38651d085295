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

use std::collections::HashMap;

use log::{trace, warn};

use crate::{
    countries::BUILTIN_TABLES,
    i18n::CountryCode,
    interfaces::PhonePolicy,
    macros::details,
    regexp_cache::RegexCache,
};

use super::{
    country_policy::CountryPolicy,
    errors::{ErrorKind, RegistryError, ValidationError, ValidationResult},
    generic_policy::GenericPolicy,
    rule_table::RuleTable,
};

/// Registry of country policies and the entry point for validation.
///
/// Built once and read-only afterwards, so a single instance can be shared
/// between threads without locking.
pub struct PhoneValidator {
    /// Compiled policies keyed by lowercase ISO 3166-1 alpha-2 code.
    policies: HashMap<&'static str, CountryPolicy>,

    /// Answers for every country without a table when the caller asks for
    /// a fallback.
    generic: GenericPolicy,
}

impl PhoneValidator {
    /// Creates a validator with every built-in table.
    ///
    /// The built-in tables are compiled here; failing to compile them is a
    /// bug in this library, not a condition callers can handle.
    pub fn new() -> Self {
        match Self::builder().build() {
            Ok(validator) => validator,
            Err(err) => {
                let err_message = format!("Could not compile built-in rule tables: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn builder() -> PhoneValidatorBuilder {
        PhoneValidatorBuilder::new()
    }

    /// Returns the policy registered for `country_code`, or the generic
    /// policy if there is none. Lookup is case-insensitive.
    pub fn resolve(&self, country_code: &str) -> &dyn PhonePolicy {
        if let Some(policy) = self.find_policy(country_code) {
            return policy;
        }
        &self.generic
    }

    /// Direct access to a country's policy, bypassing string lookup.
    pub fn policy(&self, country: CountryCode) -> Option<&CountryPolicy> {
        self.policies.get(country.as_str())
    }

    pub fn generic_policy(&self) -> &GenericPolicy {
        &self.generic
    }

    /// Countries with a registered table, sorted by code.
    pub fn get_supported_countries(&self) -> Vec<CountryCode> {
        let mut countries: Vec<CountryCode> =
            self.policies.values().map(CountryPolicy::country).collect();
        countries.sort();
        countries
    }

    pub fn is_supported(&self, country_code: &str) -> bool {
        self.find_policy(country_code).is_some()
    }

    /// Validates `phone_number` with the rules of `country_code`.
    ///
    /// Unlike [`resolve`](Self::resolve), an unknown country is an error
    /// here (`UNSUPPORTED_COUNTRY`): the generic policy is only used when
    /// asked for through [`validate_with_fallback`](Self::validate_with_fallback).
    pub fn validate(&self, country_code: &str, phone_number: &str) -> ValidationResult {
        let Some(policy) = self.find_policy(country_code) else {
            warn!("Invalid or unknown country code provided: {}", country_code);
            return Err(ValidationError::new(
                ErrorKind::UnsupportedCountry,
                details! { "country" => country_code.trim() },
            ));
        };
        trace!("Validating {:?} with {} rules", phone_number, policy.country_name());
        policy.validate(phone_number)
    }

    /// Same as [`validate`](Self::validate), but an unsupported country
    /// falls back to the generic length check unless `strict` is set.
    /// Any other failure is returned unchanged.
    pub fn validate_with_fallback(
        &self,
        country_code: &str,
        phone_number: &str,
        strict: bool,
    ) -> ValidationResult {
        match self.validate(country_code, phone_number) {
            Err(err) if err.kind() == ErrorKind::UnsupportedCountry && !strict => {
                trace!("Falling back to generic rules for {}", country_code);
                self.generic.validate(phone_number)
            }
            result => result,
        }
    }

    fn find_policy(&self, country_code: &str) -> Option<&CountryPolicy> {
        let key = country_code.trim().to_ascii_lowercase();
        self.policies.get(key.as_str())
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles a [`PhoneValidator`] from rule tables.
///
/// Starts from the built-in tables; a table for an already registered
/// country replaces it.
pub struct PhoneValidatorBuilder {
    tables: Vec<RuleTable>,
    generic: GenericPolicy,
}

impl PhoneValidatorBuilder {
    fn new() -> Self {
        Self {
            tables: BUILTIN_TABLES.to_vec(),
            generic: GenericPolicy::default(),
        }
    }

    /// Drops every table registered so far, built-ins included.
    pub fn clear(mut self) -> Self {
        self.tables.clear();
        self
    }

    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.tables.retain(|t| t.country != table.country);
        self.tables.push(table);
        self
    }

    pub fn without_country(mut self, country: CountryCode) -> Self {
        self.tables.retain(|t| t.country != country);
        self
    }

    pub fn generic_policy(mut self, generic: GenericPolicy) -> Self {
        self.generic = generic;
        self
    }

    pub fn build(self) -> Result<PhoneValidator, RegistryError> {
        let cache = RegexCache::with_capacity(128);
        let mut policies = HashMap::with_capacity(self.tables.len());
        for table in self.tables {
            let policy = CountryPolicy::compile(table, &cache)?;
            policies.insert(table.country.as_str(), policy);
        }
        trace!(
            "Compiled {} country policies from {} distinct patterns",
            policies.len(),
            cache.len()
        );
        Ok(PhoneValidator {
            policies,
            generic: self.generic,
        })
    }
}
