//! Search logging.
//!
//! Forwards to the `log` crate when the `logging` feature is enabled and
//! compiles to nothing otherwise.

macro_rules! search_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            ::log::debug!(target: "mailbox_chess::search", $($arg)*);
        }
    };
}

macro_rules! search_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            ::log::trace!(target: "mailbox_chess::search", $($arg)*);
        }
    };
}

pub(crate) use search_debug;
pub(crate) use search_trace;
