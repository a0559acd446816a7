/// Macros for browser console logging from components.
///
/// Each wraps the matching `gloo_console` function and prefixes the message
/// with `js_sys::Date::now()` so interleaved async logs can be ordered.
/// Core logic logs through `tracing` instead; these only run in the browser.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_emit!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_emit!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::__console_emit!(error, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::__console_emit!(debug, $($arg)*) };
}
