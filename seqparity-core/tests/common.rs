use seqparity_core::Scalar;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Shorthand for building creation arguments in tests.
#[allow(dead_code)]
pub fn s<T: Into<Scalar>>(v: T) -> Scalar {
    v.into()
}
