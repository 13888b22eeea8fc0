//! OGame HTTP mock endpoint creation utilities.
//!
//! Each method registers a `GET /{category}.xml` mock on the test server that
//! answers with a rendered fixture document and verifies it was called the
//! expected number of times. Keep the returned [`Mock`] alive for the duration
//! of the test; dropping it removes the endpoint.

use mockito::{Matcher, Mock};

use crate::fixtures::{
    factory::{MockAlliance, MockPlanet, MockPlayer, MockPosition, MockScore},
    xml, OgameFixtures,
};

impl<'a> OgameFixtures<'a> {
    /// Create a mock endpoint for `category` answering with `body`.
    ///
    /// # Arguments
    /// - `category` - Document name without the `.xml` extension
    /// - `query` - Query parameters the request must carry, empty for none
    /// - `body` - XML document returned with status 200
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_document_endpoint(
        &mut self,
        category: &str,
        query: &[(&str, &str)],
        body: String,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}.xml", category);
        let mut mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body(body);

        if !query.is_empty() {
            mock = mock.match_query(Matcher::AllOf(
                query
                    .iter()
                    .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                    .collect(),
            ));
        }

        mock.expect(expected_requests).create()
    }

    /// Create a mock endpoint for `category` failing with `status`.
    pub fn with_error_endpoint(
        &mut self,
        category: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}.xml", category);
        self.setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    pub fn with_players_endpoint(
        &mut self,
        players: Vec<MockPlayer>,
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "players",
            &[],
            xml::players_document(&players),
            expected_requests,
        )
    }

    pub fn with_alliances_endpoint(
        &mut self,
        alliances: Vec<MockAlliance>,
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "alliances",
            &[],
            xml::alliances_document(&alliances),
            expected_requests,
        )
    }

    pub fn with_planets_endpoint(
        &mut self,
        planets: Vec<MockPlanet>,
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "universe",
            &[],
            xml::planets_document(&planets),
            expected_requests,
        )
    }

    /// Create a mock `highscore.xml` endpoint matching `category` and `kind` query codes.
    ///
    /// Records are written as `<player>` elements for category 1 and `<alliance>`
    /// elements otherwise.
    pub fn with_highscore_endpoint(
        &mut self,
        category: u8,
        kind: u8,
        positions: Vec<MockPosition>,
        expected_requests: usize,
    ) -> Mock {
        let element = if category == 1 { "player" } else { "alliance" };
        let category_code = category.to_string();
        let kind_code = kind.to_string();

        self.with_document_endpoint(
            "highscore",
            &[("category", category_code.as_str()), ("type", kind_code.as_str())],
            xml::highscore_document(category, kind, element, &positions),
            expected_requests,
        )
    }

    pub fn with_server_data_endpoint(
        &mut self,
        properties: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "serverData",
            &[],
            xml::server_data_document(properties),
            expected_requests,
        )
    }

    pub fn with_localization_endpoint(
        &mut self,
        techs: &[(&str, &str)],
        missions: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "localization",
            &[],
            xml::localization_document(techs, missions),
            expected_requests,
        )
    }

    pub fn with_universes_endpoint(
        &mut self,
        universes: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        self.with_document_endpoint(
            "universes",
            &[],
            xml::universes_document(universes),
            expected_requests,
        )
    }

    pub fn with_player_data_endpoint(
        &mut self,
        player: MockPlayer,
        scores: Vec<MockScore>,
        planets: Vec<MockPlanet>,
        alliance: Option<MockAlliance>,
        expected_requests: usize,
    ) -> Mock {
        let body = xml::player_data_document(&player, &scores, &planets, alliance.as_ref());
        self.with_document_endpoint(
            "playerData",
            &[("id", player.id.as_str())],
            body,
            expected_requests,
        )
    }
}
