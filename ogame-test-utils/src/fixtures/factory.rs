//! Plain fixture records rendered into API documents by [`super::xml`].
//!
//! Identifiers are strings because the API never guarantees numeric ids.

pub struct MockPlayer {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub alliance: Option<String>,
}

pub struct MockAlliance {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub founder: String,
    pub found_date: Option<i64>,
    pub logo: Option<String>,
    pub homepage: Option<String>,
    pub open: Option<String>,
    pub members: Vec<String>,
}

pub struct MockMoon {
    pub id: String,
    pub name: String,
    pub size: u32,
}

pub struct MockPlanet {
    pub id: String,
    pub name: String,
    pub player: String,
    pub coords: String,
    pub moon: Option<MockMoon>,
}

pub struct MockPosition {
    pub id: String,
    pub position: u32,
    pub score: i64,
    pub ships: Option<u64>,
}

/// Score line of `playerData.xml`; `kind` is the numeric ranking type.
pub struct MockScore {
    pub kind: u8,
    pub position: u32,
    pub score: i64,
    pub ships: Option<u64>,
}

/// Create a mock player named after its id.
pub fn mock_player(id: &str, alliance: Option<&str>) -> MockPlayer {
    MockPlayer {
        id: id.to_string(),
        name: format!("Commander {}", id),
        status: None,
        alliance: alliance.map(str::to_string),
    }
}

/// Create a mock alliance with the given founder and members.
pub fn mock_alliance(id: &str, founder: &str, members: &[&str]) -> MockAlliance {
    MockAlliance {
        id: id.to_string(),
        name: format!("Alliance {}", id),
        tag: format!("A{}", id),
        founder: founder.to_string(),
        found_date: Some(1_600_000_000),
        logo: None,
        homepage: None,
        open: None,
        members: members.iter().map(|member| member.to_string()).collect(),
    }
}

/// Create a mock planet without a moon.
pub fn mock_planet(id: &str, player: &str, coords: &str) -> MockPlanet {
    MockPlanet {
        id: id.to_string(),
        name: format!("Planet {}", id),
        player: player.to_string(),
        coords: coords.to_string(),
        moon: None,
    }
}

pub fn mock_moon(id: &str) -> MockMoon {
    MockMoon {
        id: id.to_string(),
        name: "Moon".to_string(),
        size: 8774,
    }
}

/// Create a mock leaderboard entry without ships.
pub fn mock_position(id: &str, position: u32, score: i64) -> MockPosition {
    MockPosition {
        id: id.to_string(),
        position,
        score,
        ships: None,
    }
}
