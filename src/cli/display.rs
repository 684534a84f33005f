// cli/display.rs: Display level and console output macros for `lz4b`.
//
// The library itself only emits `log` records; console chatter belongs to the
// binary and is filtered by a single process-wide level.
//
// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose; 4 = debug

use std::sync::atomic::{AtomicU32, Ordering};

/// Level used when neither `-v` nor `-q` is given.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

/// Highest meaningful level.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, saturating at [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

/// Level selected by `verbose` counts of `-v` and `quiet` counts of `-q`.
pub fn level_from_flags(verbose: u8, quiet: u8) -> u32 {
    (DISPLAY_LEVEL_DEFAULT + u32::from(verbose))
        .saturating_sub(u32::from(quiet))
        .min(DISPLAY_LEVEL_MAX)
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
