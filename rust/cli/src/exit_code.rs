//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code. Also used for a trace that fails verification.
pub const ERROR: i32 = 2;
