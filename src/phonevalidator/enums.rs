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

use strum::EnumIter;

/// Categorizes phone numbers based on their primary use.
///
/// A class rule declares one of these; the first rule whose leading pattern
/// matches decides the type named in error messages, even when the rest of
/// the number then fails.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic area code.
    FixedLine,
    /// **Mobile numbers.**
    /// Numbers assigned to wireless devices, usually recognizable by an
    /// operator prefix.
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in plans (e.g. NANP) where both share the same area codes and
    /// cannot be told apart from the digits alone.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are paid for by the recipient.
    TollFree,
}

impl NumberType {
    /// Human-readable label used in messages and error details.
    pub fn label(self) -> &'static str {
        match self {
            NumberType::FixedLine => "landline",
            NumberType::Mobile => "mobile",
            NumberType::FixedLineOrMobile => "landline or mobile",
            NumberType::TollFree => "toll-free",
        }
    }
}
