use crate::{
    i18n::CountryCode,
    phonevalidator::{
        enums::NumberType,
        errors::ErrorKind,
        rule_table::{ClassRule, FormatRules, NsnLength, RuleTable, SubPrefixRule, TrunkPrefix},
    },
};

const AE_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "05",
        valid_prefixes: &["05"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["050", "052", "054", "055", "056", "058"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"05\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "0[234679]",
        valid_prefixes: &["02", "03", "04", "06", "07", "09"],
        sub_prefixes: None,
        segments: &[],
        pattern: r"0[234679]\d{7}",
    },
];

/// Mobile numbers are `05X XXX XXXX`, landlines `0X XXX XXXX`. The `0` is
/// dropped after `+971`, hence one digit less in international form.
pub const AE: RuleTable = RuleTable {
    country: CountryCode::Ae,
    country_name: "United Arab Emirates",
    calling_code: "971",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 9, max: 10 },
    international_length: Some(NsnLength::Range { min: 8, max: 9 }),
    format: FormatRules::Classes {
        rules: AE_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};

const SA_CLASSES: &[ClassRule] = &[
    ClassRule {
        number_type: NumberType::Mobile,
        leading: "05",
        valid_prefixes: &["05"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["050", "053", "054", "055", "056", "057", "058", "059"],
            kind: ErrorKind::InvalidMobilePrefix,
        }),
        segments: &[],
        pattern: r"05\d{8}",
    },
    ClassRule {
        number_type: NumberType::FixedLine,
        leading: "01",
        valid_prefixes: &["01"],
        sub_prefixes: Some(SubPrefixRule {
            allowed: &["011", "012", "013", "014", "016", "017"],
            kind: ErrorKind::InvalidAreaCode,
        }),
        segments: &[],
        pattern: r"01\d{7}",
    },
];

pub const SA: RuleTable = RuleTable {
    country: CountryCode::Sa,
    country_name: "Saudi Arabia",
    calling_code: "966",
    trunk_prefix: TrunkPrefix::Omitted("0"),
    length: NsnLength::Range { min: 9, max: 10 },
    international_length: Some(NsnLength::Range { min: 8, max: 9 }),
    format: FormatRules::Classes {
        rules: SA_CLASSES,
        unmatched: ErrorKind::InvalidPrefix,
        prefix_start: 0,
    },
};
