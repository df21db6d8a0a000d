//! Crate-internal logging macros.
//!
//! With the `defmt` feature the macros forward to the matching `defmt` macro.
//! Without it they compile to nothing, so a plain host build carries no
//! logging machinery.

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

pub(crate) use {log_debug, log_trace};
