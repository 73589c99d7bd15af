//! Testing utilities for internal use.

// std imports
use std::sync::Once;

// third-party imports
use env_logger::{self as logger};

pub const DEBUG_LOG_ENV_VAR: &str = "LEXSTREAM_DEBUG_LOG";

// ---

/// Enables debug logging to the test output if `LEXSTREAM_DEBUG_LOG` is set.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if std::env::var(DEBUG_LOG_ENV_VAR).is_ok() {
            logger::Builder::from_env(logger::Env::new().filter(DEBUG_LOG_ENV_VAR))
                .is_test(true)
                .format_timestamp_micros()
                .try_init()
                .ok();
            log::debug!("logging initialized");
        }
    });
}
