mod validator_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logging() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}
