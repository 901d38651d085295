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

/// Output of the digit normalizer: the canonical national digit string
/// together with what normalization did to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// Canonical national digits, trunk prefix included for countries that
    /// write one domestically.
    pub national: String,
    /// A `00<CC>`, `+<CC>` or bare `<CC>` prefix was detected and removed.
    pub has_country_code: bool,
    /// Length of the trunk prefix re-inserted after the country code was
    /// stripped; 0 when nothing was inserted.
    pub inserted_trunk_len: usize,
}

impl NormalizedNumber {
    /// Number of digits as the caller wrote them after the country code,
    /// i.e. without a re-inserted trunk prefix.
    pub fn dialed_len(&self) -> usize {
        self.national.len() - self.inserted_trunk_len
    }
}
