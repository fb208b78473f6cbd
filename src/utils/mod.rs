//! Utility modules for logging and process lifecycle

pub mod logging;
pub mod signal;

pub use logging::{init_logging, init_logging_from_config};
pub use signal::wait_for_shutdown_signal;
