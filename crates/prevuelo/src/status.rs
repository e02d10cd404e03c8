//! Test status reported by the external driver.

use crate::log::LogCategory;
use crate::result::PrevueloError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a single pre-flight test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test is still running
    Testing,
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test completed with a warning
    Warning,
}

impl TestStatus {
    /// Any status other than `Testing` counts toward completion
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Testing)
    }

    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Check if status is failing
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Log category used when mirroring this status into the status log
    #[must_use]
    pub const fn log_category(&self) -> LogCategory {
        match self {
            Self::Testing => LogCategory::Info,
            Self::Passed => LogCategory::Success,
            Self::Failed => LogCategory::Error,
            Self::Warning => LogCategory::Warning,
        }
    }

    /// Wire name as reported by drivers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestStatus {
    type Err = PrevueloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "testing" => Ok(Self::Testing),
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            "warning" => Ok(Self::Warning),
            other => Err(PrevueloError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!TestStatus::Testing.is_terminal());
        assert!(TestStatus::Passed.is_terminal());
        assert!(TestStatus::Failed.is_terminal());
        assert!(TestStatus::Warning.is_terminal());
    }

    #[test]
    fn test_is_passed() {
        assert!(TestStatus::Passed.is_passed());
        assert!(!TestStatus::Failed.is_passed());
        assert!(!TestStatus::Testing.is_passed());
    }

    #[test]
    fn test_log_category() {
        assert_eq!(TestStatus::Passed.log_category(), LogCategory::Success);
        assert_eq!(TestStatus::Failed.log_category(), LogCategory::Error);
        assert_eq!(TestStatus::Warning.log_category(), LogCategory::Warning);
        assert_eq!(TestStatus::Testing.log_category(), LogCategory::Info);
    }

    #[test]
    fn test_from_str_round_trip() {
        for status in [
            TestStatus::Testing,
            TestStatus::Passed,
            TestStatus::Failed,
            TestStatus::Warning,
        ] {
            assert_eq!(status.as_str().parse::<TestStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "exploded".parse::<TestStatus>().unwrap_err();
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&TestStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let status: TestStatus = serde_json::from_str("\"testing\"").unwrap();
        assert_eq!(status, TestStatus::Testing);
    }
}
