use ogame_api::{Client, Universe};
use ogame_test_utils::prelude::*;

/// Universe pointed at the mock server of `test`.
pub fn test_universe(test: &TestSetup) -> Universe {
    let client = Client::builder()
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("Failed to build OGame API client");

    client.universe_from_endpoint(test.endpoint())
}
