//! Built-in rule tables, grouped by region.
//!
//! Each table is a `const`, so callers can compile a single one with
//! [`CountryPolicy::new`](crate::phonevalidator::country_policy::CountryPolicy::new)
//! without building the whole registry.

mod americas;
mod asia;
mod europe;
mod middle_east;
mod oceania;

use crate::phonevalidator::rule_table::RuleTable;

pub use americas::{BR, CA, US};
pub use asia::{AF, HK, IN, JP, KR};
pub use europe::{AL, DE, FR, GB, IT, SM};
pub use middle_east::{AE, SA};
pub use oceania::AU;

/// Every table registered by `PhoneValidator::new`.
pub const BUILTIN_TABLES: &[RuleTable] = &[
    AE, AF, AL, AU, BR, CA, DE, FR, GB, HK, IN, IT, JP, KR, SA, SM, US,
];
