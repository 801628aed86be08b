//! Password verification.

use std::fmt;

use crate::engine::EngineOutput;
use crate::engine::SUCCESS_LINE;

/// Text 7-Zip prints when a password does not decrypt the data.
pub const WRONG_PASSWORD_MARKER: &str = "Wrong password";

/// Form of [`WRONG_PASSWORD_MARKER`] that ends a clean-exit scan.
pub const WRONG_PASSWORD_QUESTION: &str = "Wrong password?";

/// Verdict of a password test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// The tool tested the archive and confirmed `Everything is Ok`.
    Accepted,
    /// The tool reported a wrong password.
    WrongPassword,
    /// The test failed or never confirmed success.
    Rejected,
    /// The archive is not known to be encrypted, so nothing was tested.
    NotApplicable,
}

impl PasswordCheck {
    /// Returns `true` only for [`PasswordCheck::Accepted`].
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for PasswordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "password accepted"),
            Self::WrongPassword => write!(f, "wrong password"),
            Self::Rejected => write!(f, "archive test failed"),
            Self::NotApplicable => write!(f, "archive is not encrypted"),
        }
    }
}

/// Interprets the output of `t -bd -p<password>`.
///
/// A non-zero exit is never accepted; it counts as a wrong password when any
/// line mentions [`WRONG_PASSWORD_MARKER`]. After a clean exit lines are
/// scanned in order: the first success line accepts and the first line
/// containing [`WRONG_PASSWORD_QUESTION`] rejects.
///
/// # Examples
///
/// ```
/// use arcprobe_core::EngineOutput;
/// use arcprobe_core::PasswordCheck;
/// use arcprobe_core::interpret_test_output;
///
/// let out = EngineOutput::ok("Testing archive: a.zip\n\nEverything is Ok\n");
/// assert_eq!(interpret_test_output(&out), PasswordCheck::Accepted);
///
/// let out = EngineOutput::failed(2, "ERROR: Wrong password : a.txt\n");
/// assert_eq!(interpret_test_output(&out), PasswordCheck::WrongPassword);
/// ```
#[must_use]
pub fn interpret_test_output(output: &EngineOutput) -> PasswordCheck {
    let lines = output.lines();

    if !output.success {
        if lines.iter().any(|line| line.contains(WRONG_PASSWORD_MARKER)) {
            return PasswordCheck::WrongPassword;
        }
        return PasswordCheck::Rejected;
    }

    for line in lines {
        if line == SUCCESS_LINE {
            return PasswordCheck::Accepted;
        }
        if line.contains(WRONG_PASSWORD_QUESTION) {
            return PasswordCheck::WrongPassword;
        }
    }
    PasswordCheck::Rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_accepted() {
        let out = EngineOutput::ok(fixtures::TEST_OK);
        assert_eq!(interpret_test_output(&out), PasswordCheck::Accepted);
    }

    #[test]
    fn test_wrong_password_on_error_exit() {
        let out = EngineOutput::failed(2, fixtures::TEST_WRONG_PASSWORD);
        assert_eq!(interpret_test_output(&out), PasswordCheck::WrongPassword);
    }

    #[test]
    fn test_wrong_password_on_clean_exit() {
        let out = EngineOutput::ok("ERROR: a.7z : Can not open encrypted archive. Wrong password?\n");
        assert_eq!(interpret_test_output(&out), PasswordCheck::WrongPassword);
    }

    #[test]
    fn test_clean_exit_scan_stops_only_at_question_form() {
        let out = EngineOutput::ok("ERROR: Wrong password : a.txt\nEverything is Ok\n");
        assert_eq!(interpret_test_output(&out), PasswordCheck::Accepted);

        let out = EngineOutput::ok("ERROR: Wrong password : a.txt\n");
        assert_eq!(interpret_test_output(&out), PasswordCheck::Rejected);
    }

    #[test]
    fn test_no_confirmation_is_rejected() {
        let out = EngineOutput::ok("Testing archive: a.zip\n--\nType = zip\n");
        assert_eq!(interpret_test_output(&out), PasswordCheck::Rejected);
    }

    #[test]
    fn test_error_exit_is_never_accepted() {
        let out = EngineOutput::failed(2, "Everything is Ok\n");
        assert_eq!(interpret_test_output(&out), PasswordCheck::Rejected);
        assert!(!interpret_test_output(&out).is_accepted());
    }

    #[test]
    fn test_display() {
        assert_eq!(PasswordCheck::WrongPassword.to_string(), "wrong password");
        assert_eq!(PasswordCheck::Accepted.to_string(), "password accepted");
    }
}
