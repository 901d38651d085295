use std::str::FromStr;

use strum::IntoEnumIterator;

use super::init_logging;
use crate::{
    countries::BUILTIN_TABLES,
    i18n::CountryCode,
    phonevalidator::{
        country_policy::CountryPolicy, errors::ErrorKind, phonevalidator::PhoneValidator,
        validate_phone, validate_phone_with_fallback, PHONE_VALIDATOR,
    },
};

fn kind(country: &str, phone: &str) -> Option<ErrorKind> {
    validate_phone(country, phone).err().map(|err| err.kind())
}

#[test]
fn every_builtin_table_compiles() {
    init_logging();
    for table in BUILTIN_TABLES {
        assert!(CountryPolicy::new(*table).is_ok(), "{}", table.country);
    }
}

#[test]
fn every_country_code_has_a_table() {
    let supported = PHONE_VALIDATOR.get_supported_countries();
    let all: Vec<CountryCode> = CountryCode::iter().collect();
    assert_eq!(supported, all);
    assert_eq!(supported.first(), Some(&CountryCode::Ae));
    assert_eq!(supported.last(), Some(&CountryCode::Us));
}

#[test]
fn country_lookup_ignores_case_and_whitespace() {
    assert!(validate_phone("us", "2125551234").is_ok());
    assert!(validate_phone("US", "2125551234").is_ok());
    assert!(validate_phone(" Us ", "2125551234").is_ok());
    assert!(PHONE_VALIDATOR.is_supported("GB"));
    assert!(!PHONE_VALIDATOR.is_supported("zz"));
    assert_eq!(CountryCode::from_str("GB").ok(), Some(CountryCode::Gb));
}

#[test]
fn validation_is_deterministic() {
    init_logging();
    let validator = PhoneValidator::new();
    let cases = [("ae", "0511234567"), ("us", "2125551234"), ("gb", "070"), ("zz", "1")];
    for (country, phone) in cases {
        assert_eq!(validator.validate(country, phone), validator.validate(country, phone));
        assert_eq!(validator.validate(country, phone), validate_phone(country, phone));
    }
}

#[test]
fn odd_inputs_never_panic() {
    let long = "9".repeat(4096);
    let inputs = [
        "",
        " ",
        "+",
        "00",
        "()",
        "-.-",
        "٠٥٠١٢٣٤٥٦٧",
        "０５０１２３４５６７",
        long.as_str(),
        "☎ 050",
    ];
    for country in CountryCode::iter() {
        for input in inputs {
            let _ = validate_phone(country.as_str(), input);
            let _ = validate_phone_with_fallback(country.as_str(), input, false);
        }
    }
}

#[test]
fn empty_input_is_too_short() {
    let err = validate_phone("us", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooShort);
    assert_eq!(err.details().number("got"), Some(0));
}

#[test]
fn us_length_boundaries() {
    assert!(validate_phone("us", "2125551234").is_ok());
    let err = validate_phone("us", "212555123").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooShort);
    assert_eq!(err.message(), "Phone number is too short: expected at least 10 digits, got 9");
    assert_eq!(kind("us", "21255512345"), Some(ErrorKind::TooLong));
    assert_eq!(kind("us", "0125551234"), Some(ErrorKind::InvalidAreaCode));
}

#[test]
fn exactly_one_cause_is_reported() {
    // too short and a bad prefix at the same time: length wins
    let err = validate_phone("ae", "0512345").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooShort);
    assert_eq!(err.details().number("expected"), Some(9));
    assert_eq!(err.details().number("got"), Some(7));

    // letters win over everything
    assert_eq!(kind("ae", "05123AB"), Some(ErrorKind::InvalidCharacters));

    // missing trunk zero is reported before the prefix
    assert_eq!(kind("ae", "511234567"), Some(ErrorKind::MissingLeadingZero));
}

#[test]
fn formatting_does_not_change_the_outcome() {
    let phones = ["2125551234", "212-555-1234", "(212) 555-1234", "212.555.1234", " 212 555 1234 "];
    for phone in phones {
        assert!(validate_phone("us", phone).is_ok(), "{phone}");
    }
    for phone in ["2121111234", "212-111-1234", "(212) 111-1234"] {
        assert_eq!(kind("us", phone), Some(ErrorKind::InvalidExchangeCode), "{phone}");
    }
}

/// `+CC rest` rewritten as `00CC rest` and `CC rest`.
fn international_variants(plus_form: &str) -> [String; 3] {
    let without_plus = plus_form.trim_start_matches('+');
    [plus_form.to_owned(), format!("00{without_plus}"), without_plus.to_owned()]
}

#[test]
fn international_and_domestic_forms_agree() {
    let cases = [
        ("ae", "0501234567", "+971 50 123 4567"),
        ("sa", "0501234567", "+966 50 123 4567"),
        ("gb", "07912345678", "+44 7912 345678"),
        ("de", "015112345678", "+49 1511 2345678"),
        ("de", "030123456", "+49 30 123456"),
        ("fr", "0612345678", "+33 6 12 34 56 78"),
        ("it", "0612345678", "+39 06 1234 5678"),
        ("al", "0661234567", "+355 66 123 4567"),
        ("in", "09876543210", "+91 98765 43210"),
        ("jp", "09012345678", "+81 90 1234 5678"),
        ("jp", "0312345678", "+81 3 1234 5678"),
        ("kr", "01012345678", "+82 10 1234 5678"),
        ("hk", "21234567", "+852 2123 4567"),
        ("af", "0701234567", "+93 70 123 4567"),
        ("au", "0412345678", "+61 412 345 678"),
        ("br", "11987654321", "+55 11 98765 4321"),
        ("us", "2125551234", "+1 212 555 1234"),
        ("ca", "4165551234", "+1 416 555 1234"),
    ];
    for (country, domestic, international) in cases {
        assert!(validate_phone(country, domestic).is_ok(), "{country} {domestic}");
        for variant in international_variants(international) {
            assert!(validate_phone(country, &variant).is_ok(), "{country} {variant}");
        }
    }
}

#[test]
fn international_forms_keep_the_domestic_error() {
    let cases = [
        ("ae", "0511234567", "+971 51 123 4567"),
        ("gb", "07012345678", "+44 7012 345678"),
        ("de", "015012345678", "+49 1501 2345678"),
        ("kr", "01212345678", "+82 12 1234 5678"),
    ];
    for (country, domestic, international) in cases {
        let expected = kind(country, domestic);
        assert_eq!(expected, Some(ErrorKind::InvalidMobilePrefix), "{country} {domestic}");
        for variant in international_variants(international) {
            assert_eq!(kind(country, &variant), expected, "{country} {variant}");
        }
    }
}

#[test]
fn idd_prefix_and_redundant_trunk_are_accepted() {
    assert!(validate_phone("ae", "00971501234567").is_ok());
    assert!(validate_phone("ae", "+971 (0)50 123 4567").is_ok());
    assert!(validate_phone("gb", "0044 7912 345678").is_ok());
    assert!(validate_phone("gb", "+44 (0)7912 345678").is_ok());
}

#[test]
fn unicode_digits_are_normalized() {
    assert!(validate_phone("ae", "٠٥٠١٢٣٤٥٦٧").is_ok());
    assert!(validate_phone("ae", "０５０１２３４５６７").is_ok());
}

#[test]
fn unsupported_country() {
    let err = validate_phone("zz", "1234567890").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedCountry);
    assert_eq!(err.details().text("country"), Some("zz"));
    assert_eq!(err.message(), "Country 'zz' is not supported");
    assert_eq!(kind("", "1234567890"), Some(ErrorKind::UnsupportedCountry));
}

#[test]
fn fallback_applies_only_to_unsupported_countries() {
    assert!(validate_phone_with_fallback("zz", "1234567890", false).is_ok());
    assert!(validate_phone_with_fallback("zz", "٠٥٠١٢٣٤٥٦٧", false).is_ok());
    assert_eq!(
        validate_phone_with_fallback("zz", "1234567890", true).unwrap_err().kind(),
        ErrorKind::UnsupportedCountry
    );
    assert_eq!(
        validate_phone_with_fallback("zz", "123456", false).unwrap_err().kind(),
        ErrorKind::TooShort
    );
    assert_eq!(
        validate_phone_with_fallback("zz", "000 000 0000", false).unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );

    // a supported country keeps its own verdict
    assert_eq!(
        validate_phone_with_fallback("us", "0125551234", false).unwrap_err().kind(),
        ErrorKind::InvalidAreaCode
    );
    assert!(validate_phone_with_fallback("us", "2125551234", true).is_ok());
}

#[test]
fn every_error_has_a_message_and_code() {
    let cases = [
        ("us", "212-555-ABCD"),
        ("us", "212"),
        ("us", "2125551234567"),
        ("ae", "501234567"),
        ("ae", "0812345678"),
        ("ae", "0511234567"),
        ("us", "2115551234"),
        ("us", "2121111234"),
        ("hk", "12345678"),
        ("zz", "1"),
    ];
    for (country, phone) in cases {
        let err = validate_phone(country, phone).unwrap_err();
        assert!(!err.message().is_empty(), "{country} {phone}");
        assert_eq!(err.code(), err.kind().code());
    }
}
