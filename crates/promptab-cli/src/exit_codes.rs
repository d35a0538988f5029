//! Process exit codes for `promptab`.
//! The verdict of a run never affects the exit code; only fatal errors do.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // Results could not be persisted
