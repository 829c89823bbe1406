#![macro_use]
#![allow(unused_macros)]

// Routes to `log` on hosts and `defmt` on targets. With neither backend the
// arguments are still borrowed so values only used for logging stay "used".
macro_rules! log_at {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::$level!($s $(, $x)*);

            #[cfg(all(feature = "defmt", not(feature = "log")))]
            ::defmt::$level!($s $(, $x)*);

            #[cfg(not(any(feature = "log", feature = "defmt")))]
            {
                $(let _ = &$x;)*
            }
        }
    };
}

macro_rules! log_trace {
    ($($t:tt)*) => {
        log_at!(trace, $($t)*)
    };
}

macro_rules! log_debug {
    ($($t:tt)*) => {
        log_at!(debug, $($t)*)
    };
}

macro_rules! log_info {
    ($($t:tt)*) => {
        log_at!(info, $($t)*)
    };
}

macro_rules! log_warn {
    ($($t:tt)*) => {
        log_at!(warn, $($t)*)
    };
}

macro_rules! log_error {
    ($($t:tt)*) => {
        log_at!(error, $($t)*)
    };
}
