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

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// ISO 3166-1 alpha-2 codes of the countries that ship with rule tables.
///
/// Parsing is ASCII case-insensitive; the canonical form is lowercase, which
/// is also the registry key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    EnumIter, EnumString, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CountryCode {
    Ae,
    Af,
    Al,
    Au,
    Br,
    Ca,
    De,
    Fr,
    Gb,
    Hk,
    In,
    It,
    Jp,
    Kr,
    Sa,
    Sm,
    Us,
}

impl CountryCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
