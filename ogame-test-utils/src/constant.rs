//! Standard values shared by every mocked API document.

use chrono::{DateTime, Utc};

/// User agent for test clients.
pub static TEST_USER_AGENT: &str = "ogame-api-tests/1.0 (contact@example.com)";

/// `timestamp` attribute written on every mocked document root.
pub const TEST_TIMESTAMP: i64 = 1_700_000_000;

/// `serverId` attribute written on every mocked document root.
pub static TEST_SERVER_ID: &str = "en152";

/// [`TEST_TIMESTAMP`] as a UTC date-time.
pub fn test_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(TEST_TIMESTAMP, 0).unwrap()
}
