// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logging macros for convenient usage

/// Main logging macro; captures the call site and renders the message
/// before handing the record to the logger.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let message = format!($($arg)+);
        let record = $crate::LogRecord::new(
            $level,
            module_path!(),
            message,
        )
        .with_location(file!(), line!());
        $crate::log(record);
    }};
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)*)
    };
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Info, $($arg)*)
    };
}

/// Warning level logging
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Warning, $($arg)*)
    };
}

/// Error level logging
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Error, $($arg)*)
    };
}

/// Critical level logging
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Critical, $($arg)*)
    };
}

/// Fatal level logging; the rendered line carries a stack trace
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Fatal, $($arg)*)
    };
}
