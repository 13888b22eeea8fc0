use mockito::{Server, ServerGuard};

use crate::fixtures::OgameFixtures;

pub struct TestSetup {
    pub server: ServerGuard,
}

impl TestSetup {
    pub async fn new() -> Self {
        TestSetup {
            server: Server::new_async().await,
        }
    }

    /// Base URL of the mock server, usable as a universe endpoint.
    pub fn endpoint(&self) -> String {
        self.server.url()
    }

    pub fn ogame<'a>(&'a mut self) -> OgameFixtures<'a> {
        OgameFixtures { setup: self }
    }
}
