use crate::{
    i18n::CountryCode,
    phonevalidator::{
        enums::NumberType,
        errors::ErrorKind,
        rule_table::{ClassRule, FormatRules, NsnLength, RuleTable, TrunkPrefix},
    },
};

const AU_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "04",
        valid_prefixes: &["04"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"04\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[2378]",
        valid_prefixes: &["02", "03", "07", "08"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[2378]\d{8}",
    },
];

/// Geographic and mobile numbers only. Service numbers (13, 1300, 1800)
/// are written without the trunk `0` and are not covered; they are reported
/// as `MISSING_LEADING_ZERO`.
pub const AU: RuleTable = RuleTable {
    country: CountryCode::Au,
    country_name: "Australia",
    calling_code: "61",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Exact(10),
    international_length: Some(NsnLength::Exact(9)),
    format: FormatRules::Classes {
        rules: AU_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};
