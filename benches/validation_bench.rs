use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonecheck::{validate_phone, PHONE_VALIDATOR};

use phonenumber::{self as rlp, country::Id};

// (number, country for rphonecheck, country for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

/// A mix of valid numbers and every early-exit path, so neither the
/// success path nor a single check dominates.
fn setup_validation_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        ("(650) 253-0000", "us", US),
        ("+1 212 555 1234", "us", US),
        ("+44 20 8765 4321", "gb", GB),
        ("07912 345678", "gb", GB),
        ("+971 50 123 4567", "ae", AE),
        ("051 123 4567", "ae", AE),
        ("02 12345678", "it", IT),
        ("+49 151 12345678", "de", DE),
        ("090-1234-5678", "jp", JP),
        ("1-800-FLOWERS", "us", US),
        ("12345", "de", DE),
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let numbers = setup_validation_data();

    // compile the registry outside of the measured loop
    assert!(PHONE_VALIDATOR.is_supported("us"));

    let mut group = c.benchmark_group("Validation Comparison");

    group.bench_function("rphonecheck: validate_phone()", |b| {
        b.iter(|| {
            for (number, country, _) in &numbers {
                let _ = validate_phone(black_box(country), black_box(number));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse() + is_valid()", |b| {
        b.iter(|| {
            for (number, _, id) in &numbers {
                if let Ok(parsed) = rlp::parse(black_box(Some(*id)), black_box(number)) {
                    let _ = rlp::is_valid(&parsed);
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
