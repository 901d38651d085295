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

//! Rule tables keep their patterns unanchored so they read like the
//! numbering plans they come from. Anchoring happens once, here, when a
//! table is compiled: `find` on an unanchored alternation returns the
//! leftmost-first branch, which is not necessarily the one spanning the
//! whole input.

/// Wraps `pattern` so it only matches the whole input.
pub fn anchor_full(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so it only matches at the start of the input.
pub fn anchor_start(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchor_full, anchor_start};

    #[test]
    fn full_anchor_rejects_partial_alternation() {
        // unanchored `find` would stop at "02" + 7 digits
        let re = Regex::new(&anchor_full(r"02\d{7}|02\d{8}")).unwrap();
        assert!(re.is_match("0212345678"));
        assert!(re.is_match("021234567"));
        assert!(!re.is_match("02123456789"));
    }

    #[test]
    fn start_anchor() {
        let re = Regex::new(&anchor_start("0[67]")).unwrap();
        assert!(re.is_match("0612"));
        assert!(!re.is_match("1061"));
    }
}
