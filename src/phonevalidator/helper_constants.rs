/// International access prefix accepted in front of a calling code.
pub const INTERNATIONAL_ACCESS_PREFIX: &str = "00";
pub const PLUS_SIGN: char = '+';
// Punctuation tolerated between digits, besides whitespace.
pub const VALID_PUNCTUATION: &[char] = &['+', '-', '(', ')', '.'];

// The ITU caps numbers at 15 digits; 7 is the shortest subscriber number
// plausible without country-specific knowledge.
pub const GENERIC_MIN_LENGTH: usize = 7;
pub const GENERIC_MAX_LENGTH: usize = 15;
