//! Shared constants for the bcdiff CLI.

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".bcdiff.toml";

/// Process exit status when backwards-incompatible changes remain after the
/// baseline is applied.
pub const EXIT_BC_BREAKS: i32 = 3;
