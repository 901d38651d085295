use crate::{
    i18n::CountryCode,
    phonevalidator::{
        enums::NumberType,
        errors::ErrorKind,
        rule_table::{
            ClassRule, FormatRules, NsnLength, RuleTable, Shape, SubPrefixRule, TrunkPrefix,
        },
    },
};

const GB_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "07",
        valid_prefixes: &["07"],
        // 070 personal numbering, 076 pagers
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["071", "072", "073", "074", "075", "077", "078", "079"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"07\d{9}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[123]",
        valid_prefixes: &["01", "02", "03"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[123]\d{8,9}",
    },
    ClassRule {
        number_type: NumberType::TollFree,
        leading: "080",
        valid_prefixes: &["080"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"080[08]\d{6,7}",
    },
];

pub const GB: RuleTable = RuleTable {
    country: CountryCode::Gb,
    country_name: "United Kingdom",
    calling_code: "44",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 10, max: 11 },
    international_length: Some(NsnLength::Range { min: 9, max: 10 }),
    format: FormatRules::Classes {
        rules: GB_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const DE_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "01[5-7]",
        valid_prefixes: &["015", "016", "017"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &[
                "0151", "0152", "0155", "0157", "0159", "0160", "0162", "0163", "0170", "0171",
                "0172", "0173", "0174", "0175", "0176", "0177", "0178", "0179",
            ],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"01(?:5\d{9}|[67]\d{8,9})",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[2-9]",
        valid_prefixes: &["02", "03", "04", "05", "06", "07", "08", "09"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[2-9]\d{5,11}",
    },
];

pub const DE: RuleTable = RuleTable {
    country: CountryCode::De,
    country_name: "Germany",
    calling_code: "49",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 7, max: 13 },
    international_length: Some(NsnLength::Range { min: 6, max: 12 }),
    format: FormatRules::Classes {
        rules: DE_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const FR_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "0[67]",
        valid_prefixes: &["06", "07"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["06", "073", "074", "075", "076", "077", "078", "079"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"0[67]\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[1-59]",
        valid_prefixes: &["01", "02", "03", "04", "05", "09"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[1-59]\d{8}",
    },
    ClassRule {
        number_type: NumberType::TollFree,
        leading: "08",
        valid_prefixes: &["08"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"080\d{7}",
    },
];

pub const FR: RuleTable = RuleTable {
    country: CountryCode::Fr,
    country_name: "France",
    calling_code: "33",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Exact(10),
    international_length: Some(NsnLength::Exact(9)),
    format: FormatRules::Classes {
        rules: FR_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const IT_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "3",
        valid_prefixes: &["3"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["31", "32", "33", "34", "35", "36", "37", "38", "39"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"3\d{8,9}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0",
        valid_prefixes: &["0"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0\d{5,10}",
    },
];

pub const IT: RuleTable = RuleTable {
    country: CountryCode::It,
    country_name: "Italy",
    calling_code: "39",
    trunk_prefix: TrunkPrefix::Kept("0"),
    length: NsnLength::Range { min: 6, max: 11 },
    international_length: None,
    format: FormatRules::Classes {
        rules: IT_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

// San Marino is reachable through the Italian 0549 area code, its own
// mobile range and the old six-digit local numbers.
const SM_SHAPES: &[Shape] = &[
    Shape {
        number_type: NumberType::FixedLine,
        length: 10,
        pattern: r"0549\d{6}",
    },
    Shape {
        number_type: NumberType::Mobile,
        length: 8,
        pattern: r"6[16]\d{6}",
    },
    Shape {
        number_type: NumberType::FixedLine,
        length: 6,
        // at least one non-zero digit
        pattern: r"0*[1-9]\d*",
    },
];

pub const SM: RuleTable = RuleTable {
    country: CountryCode::Sm,
    country_name: "San Marino",
    calling_code: "378",
    trunk_prefix: TrunkPrefix::None,
    length: NsnLength::Range { min: 6, max: 10 },
    international_length: None,
    format: FormatRules::Shapes(SM_SHAPES),
};

const AL_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "06",
        valid_prefixes: &["06"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["066", "067", "068", "069"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"06[6-9]\d{7}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[2-58]",
        valid_prefixes: &["02", "03", "04", "05", "08"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[2-58]\d{6,7}",
    },
];

pub const AL: RuleTable = RuleTable {
    country: CountryCode::Al,
    country_name: "Albania",
    calling_code: "355",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 8, max: 10 },
    international_length: Some(NsnLength::Range { min: 7, max: 9 }),
    format: FormatRules::Classes {
        rules: AL_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};
