// src/internal/logger/macros.rs

// Convenience logging macros. Each expands to a `Logger::log` call and
// evaluates to its `Result<usize, LogError>`. Without a `logger:` prefix they
// go through the process-wide logger.

#[macro_export]
macro_rules! tint_log {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::internal::logger::global().log($severity, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::tint_log!(logger: $logger, $crate::internal::logger::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tint_log!($crate::internal::logger::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::tint_log!(logger: $logger, $crate::internal::logger::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tint_log!($crate::internal::logger::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::tint_log!(logger: $logger, $crate::internal::logger::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tint_log!($crate::internal::logger::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::tint_log!(logger: $logger, $crate::internal::logger::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tint_log!($crate::internal::logger::Severity::Error, $($arg)+)
    };
}
