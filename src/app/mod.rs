mod cli;
mod error;
pub(crate) mod logger;
mod orchestrator;
mod processing;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use orchestrator::run_app;

// Macros for crate-wide verbose logging.
// They call into `app::logger` through `$crate`, so they expand correctly in any
// module of the crate (app children as well as `speech`).
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            // Use format_args! to create std::fmt::Arguments, avoiding String allocation.
            $crate::app::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            // Use format_args! to create std::fmt::Arguments, avoiding String allocation.
            $crate::app::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

pub(crate) use verbose_eprintln;
pub(crate) use verbose_println;
