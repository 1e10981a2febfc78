//! Standard listener implementations.

mod logging;

pub use logging::LoggingListener;
