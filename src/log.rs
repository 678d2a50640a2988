use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("SANTEXT_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Builds a message that carries extra details only when debug is enabled.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Additional details appended in debug mode.
///
/// # Returns
///
/// A formatted string containing the message and, in debug mode, the details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message to stderr with optional formatted arguments.
///
/// Output goes to stderr so it never mixes with transformed text on stdout.
///
/// # Examples
///
/// ```
/// use santext::debug;
///
/// debug!("Operation completed");
/// debug!("Applied {} on {} chars", "uppercase", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
