//! Process exit codes.

/// Wrong argument count or unknown selector. Reported as 255 on Unix.
pub const USAGE_ERROR: i32 = -1;
/// Any failure after the arguments were accepted.
pub const FAILURE: i32 = 1;
