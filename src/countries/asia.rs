use crate::{
    i18n::CountryCode,
    phonevalidator::{
        enums::NumberType,
        errors::ErrorKind,
        rule_table::{ClassRule, FormatRules, NsnLength, RuleTable, SubPrefixRule, TrunkPrefix},
    },
};

const IN_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "[6-9]",
        valid_prefixes: &["6", "7", "8", "9"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"[6-9]\d{9}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "[2-5]",
        valid_prefixes: &["2", "3", "4", "5"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"[2-5]\d{9}",
    },
];

pub const IN: RuleTable = RuleTable {
    country: CountryCode::In,
    country_name: "India",
    calling_code: "91",
    // mobiles are usually written without it, landlines with it
    trunk_prefix: TrunkPrefix::Optional("0"),
    length: NsnLength::Exact(10),
    international_length: None,
    format: FormatRules::Classes {
        rules: IN_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const JP_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "0[789]0",
        valid_prefixes: &["070", "080", "090"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[789]0\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[1-9]",
        valid_prefixes: &["01", "02", "03", "04", "05", "06", "07", "08", "09"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[1-9]\d{8}",
    },
];

pub const JP: RuleTable = RuleTable {
    country: CountryCode::Jp,
    country_name: "Japan",
    calling_code: "81",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 10, max: 11 },
    international_length: Some(NsnLength::Range { min: 9, max: 10 }),
    format: FormatRules::Classes {
        rules: JP_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const KR_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "01",
        valid_prefixes: &["01"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["010", "011", "016", "017", "018", "019"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"01[016-9]\d{7,8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[2-6]",
        valid_prefixes: &["02", "03", "04", "05", "06"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &[
                "02", "031", "032", "033", "041", "042", "043", "044", "051", "052", "053",
                "054", "055", "061", "062", "063", "064",
            ],
            kind: ErrorKind::InvalidAreaCode,
        }),
        segments: &[],
        pattern: r"02\d{7,8}|0[3-6][1-5]\d{7,8}",
    },
];

pub const KR: RuleTable = RuleTable {
    country: CountryCode::Kr,
    country_name: "South Korea",
    calling_code: "82",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 9, max: 11 },
    international_length: Some(NsnLength::Range { min: 8, max: 10 }),
    format: FormatRules::Classes {
        rules: KR_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

/// Eight digits, no trunk prefix, no area codes.
pub const HK: RuleTable = RuleTable {
    country: CountryCode::Hk,
    country_name: "Hong Kong",
    calling_code: "852",
    trunk_prefix: TrunkPrefix::None,
    length: NsnLength::Exact(8),
    international_length: None,
    format: FormatRules::Pattern(r"[2-9]\d{7}"),
};

const AF_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "07",
        valid_prefixes: &["07"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"07\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[2-6]",
        valid_prefixes: &["02", "03", "04", "05", "06"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[2-6]\d{8}",
    },
];

pub const AF: RuleTable = RuleTable {
    country: CountryCode::Af,
    country_name: "Afghanistan",
    calling_code: "93",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Exact(10),
    international_length: Some(NsnLength::Exact(9)),
    format: FormatRules::Classes {
        rules: AF_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};
