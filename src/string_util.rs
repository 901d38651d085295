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

/// Strips `prefix` from an owned string in place. Returns `true` if the
/// prefix was found and removed.
///
/// Calls `drain`, so the buffer is reused instead of reallocated.
pub fn strip_prefix_in_place(s: &mut String, prefix: &str) -> bool {
    if prefix.is_empty() || !s.starts_with(prefix) {
        return false;
    }
    s.drain(..prefix.len());
    true
}

/// Collects the ASCII digits of `s`, dropping everything else.
pub fn ascii_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
