use crate::{
    i18n::CountryCode,
    phonevalidator::{
        enums::NumberType,
        errors::ErrorKind,
        rule_table::{
            ClassRule, FormatRules, NsnLength, RuleTable, SegmentRule, SubPrefixRule, TrunkPrefix,
        },
    },
};

// North American Numbering Plan: NXX-NXX-XXXX, where neither the area code
// nor the exchange code may be N11.
const NANP_SEGMENTS: &[SegmentRule] = &[
    SegmentRule {
        name: "area code",
        start: 0,
        end: 3,
        pattern: r"[2-9](?:[02-9]\d|1[02-9])",
        kind: ErrorKind::InvalidAreaCode,
    },
    SegmentRule {
        name: "exchange code",
        start: 3,
        end: 6,
        pattern: r"[2-9](?:[02-9]\d|1[02-9])",
        kind: ErrorKind::InvalidExchangeCode,
    },
];

const NANP_LEADING_DIGITS: &[&str] = &["2", "3", "4", "5", "6", "7", "8", "9"];

const US_CLASSES: &[ClassRule] = &[ClassRule {
    number_type: NumberType::FixedLineOrMobile,
    leading: "[2-9]",
    valid_prefixes: NANP_LEADING_DIGITS,
    sub_prefixes: None,
    segments: NANP_SEGMENTS,
    pattern: r"[2-9]\d{9}",
}];

pub const US: RuleTable = RuleTable {
    country: CountryCode::Us,
    country_name: "United States",
    calling_code: "1",
    // the domestic long-distance "1" coincides with the calling code and is
    // stripped with it
    trunk_prefix: TrunkPrefix::None,
    length: NsnLength::Exact(10),
    international_length: None,
    format: FormatRules::Classes {
        rules: US_CLASSES,
        unmatched: ErrorKind::InvalidAreaCode,
        prefix_start: 0,
    },
};

const CA_CLASSES: &[ClassRule] = &[ClassRule {
    number_type: NumberType::FixedLineOrMobile,
    leading: "[2-9]",
    valid_prefixes: NANP_LEADING_DIGITS,
    sub_prefixes: Some(SubPrefixRule {
        allowed: &[
            "204", "226", "236", "249", "250", "263", "289", "306", "343", "354", "365", "367",
            "368", "382", "387", "403", "416", "418", "428", "431", "437", "438", "450", "468",
            "474", "506", "514", "519", "548", "579", "581", "584", "587", "600", "604", "613",
            "639", "647", "672", "683", "705", "709", "742", "753", "778", "780", "782", "807",
            "819", "825", "867", "873", "879", "902", "905",
        ],
        kind: ErrorKind::InvalidAreaCode,
    }),
    segments: NANP_SEGMENTS,
    pattern: r"[2-9]\d{9}",
}];

pub const CA: RuleTable = RuleTable {
    country: CountryCode::Ca,
    country_name: "Canada",
    calling_code: "1",
    trunk_prefix: TrunkPrefix::None,
    length: NsnLength::Exact(10),
    international_length: None,
    format: FormatRules::Classes {
        rules: CA_CLASSES,
        unmatched: ErrorKind::InvalidAreaCode,
        prefix_start: 0,
    },
};

const BR_AREA_CODE: &[SegmentRule] = &[SegmentRule {
    name: "area code",
    start: 0,
    end: 2,
    pattern: r"1[1-9]|2[12478]|3[1-578]|4[1-9]|5[1345]|6[1-9]|7[13-579]|8[1-9]|9[1-9]",
    kind: ErrorKind::InvalidAreaCode,
}];

const BR_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: r"\d{2}9",
        valid_prefixes: &["9"],
        sub_prefixes: None,
        segments: BR_AREA_CODE,
        pattern: r"[1-9]{2}9\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: r"\d{2}[2-5]",
        valid_prefixes: &["2", "3", "4", "5"],
        sub_prefixes: None,
        segments: BR_AREA_CODE,
        pattern: r"[1-9]{2}[2-5]\d{7}",
    },
];

pub const BR: RuleTable = RuleTable {
    country: CountryCode::Br,
    country_name: "Brazil",
    calling_code: "55",
    trunk_prefix: TrunkPrefix::Optional("0"),
    length: NsnLength::Range { min: 10, max: 11 },
    international_length: None,
    format: FormatRules::Classes {
        rules: BR_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        // the subscriber number follows the two-digit area code
        prefix_start: 2,
    },
};
