//! Per-test records tracked by the aggregator.

use crate::status::TestStatus;
use serde::{Deserialize, Serialize};

/// State of one pre-flight test as last reported by the driver.
///
/// Records are created on the first report for a name and mutated in place
/// on later reports; they live for the whole session. The slug is the
/// stable surrogate identifier the rendering surface keys its cards on,
/// computed once at creation and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Raw test name as reported
    pub name: String,
    /// Surrogate identifier: name with non-alphanumeric characters replaced
    slug: String,
    /// Most recently reported status
    pub status: TestStatus,
    /// Free-text details from the most recent report
    pub details: String,
}

impl TestRecord {
    /// Create a record from its first report
    #[must_use]
    pub fn new(name: impl Into<String>, status: TestStatus, details: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            slug,
            status,
            details: details.into(),
        }
    }

    /// Apply a subsequent report for the same test
    pub fn apply(&mut self, status: TestStatus, details: impl Into<String>) {
        self.status = status;
        self.details = details.into();
    }

    /// Cached surrogate identifier
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Replace every non-alphanumeric character with `-`.
///
/// Runs are not collapsed: `"Build  Image"` becomes `"Build--Image"`, so
/// distinct raw names keep distinct slugs wherever possible.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
