//! Exit code constants for the gap CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing files, not initialized)
//! - 2: Shared config failure (managed block missing, duplicate rule)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or a required file is absent.
pub const USER_ERROR: i32 = 1;

/// The managed block in `.gitconfig` is missing or a rule would be duplicated.
pub const CONFIG_FAILURE: i32 = 2;

/// Git operation failure: a git subprocess exited unsuccessfully.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
