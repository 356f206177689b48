//! Exit code constants for the promptform CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, aborted session)
//! - 2: Generation failure (the backend rejected or failed a request)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an authoring session ended early.
pub const USER_ERROR: i32 = 1;

/// Generation failure: the generation backend returned an error.
pub const GENERATION_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, GENERATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
