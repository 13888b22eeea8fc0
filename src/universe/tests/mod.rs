use ogame_test_utils::prelude::*;

use crate::{
    client::Client,
    error::{entity::EntityError, transport::TransportError, Error},
    universe::Universe,
};


/// Universe pointed at the mock server of `test`.
fn test_universe(test: &TestSetup) -> Universe {
    let client = Client::builder()
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("Failed to build test client");
    Universe::from_endpoint(&client, test.endpoint())
}
