//! Exit code constants for the exam-prompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown labels, unreadable input)
//! - 2: Validation failure (empty problem text)
//! - 3: Precondition failure (copy before generate)
//! - 4: Clipboard failure
//! - 5: Configuration failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown labels, or unreadable input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a required field is missing.
pub const VALIDATION_FAILURE: i32 = 2;

/// Precondition failure: the operation needs a generated prompt.
pub const PRECONDITION_FAILURE: i32 = 3;

/// Clipboard failure: no clipboard command available or it exited non-zero.
pub const CLIPBOARD_FAILURE: i32 = 4;

/// Configuration failure: unreadable, unparsable, or invalid config.
pub const CONFIG_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            VALIDATION_FAILURE,
            PRECONDITION_FAILURE,
            CLIPBOARD_FAILURE,
            CONFIG_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_fit_in_a_byte() {
        for code in [
            SUCCESS,
            USER_ERROR,
            VALIDATION_FAILURE,
            PRECONDITION_FAILURE,
            CLIPBOARD_FAILURE,
            CONFIG_FAILURE,
        ] {
            assert!((0..=255).contains(&code));
        }
    }
}
