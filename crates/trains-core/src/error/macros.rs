//! Error macros for trains

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TrainsError::UsageError($msg.to_string()))
    };
}
