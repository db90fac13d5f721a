//! Error macros for algoviz

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::VizError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::VizError::UsageError($msg.to_string()))
    };
}

/// Macro for creating data errors on malformed graph input
#[macro_export]
macro_rules! bail_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::VizError::invalid_graph(format!($($arg)*)))
    };
}
