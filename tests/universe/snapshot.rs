use ogame_api::{Error, Position, PositionCategory, PositionKind};
use ogame_test_utils::prelude::*;

use crate::test_universe;

/// Expect a lone player without alliance to come back as a one-element list
#[tokio::test]
async fn single_player_without_alliance() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test
        .ogame()
        .with_players_endpoint(vec![factory::mock_player("100", None)], 1);

    let universe = test_universe(&test);
    let players = universe.players().await?;

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, "100");
    assert!(players[0].alliance.is_none());
    assert_eq!(players[0].timestamp, test_timestamp());
    assert_eq!(players[0].universe, universe);
    endpoint.assert();

    Ok(())
}

/// Expect an alliance with two members and its founder reference
#[tokio::test]
async fn alliance_with_two_members() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test
        .ogame()
        .with_alliances_endpoint(vec![factory::mock_alliance("500", "1", &["1", "2"])], 1);

    let universe = test_universe(&test);
    let alliances = universe.alliances().await?;

    let alliance = &alliances[0];
    let members: Vec<_> = alliance.members.iter().map(|member| member.id()).collect();
    assert_eq!(members, vec!["1", "2"]);
    assert_eq!(alliance.founder.id(), "1");
    assert!(alliance.is_member("2"));
    assert!(!alliance.is_member("3"));
    endpoint.assert();

    Ok(())
}

/// Expect military player entries to carry ships while economy entries do not
#[tokio::test]
async fn position_shapes_follow_category_and_kind() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mut military_entry = factory::mock_position("100", 1, 2000);
    military_entry.ships = Some(120);
    let military = test
        .ogame()
        .with_highscore_endpoint(1, 3, vec![military_entry], 1);
    let economy = test.ogame().with_highscore_endpoint(
        1,
        1,
        vec![factory::mock_position("100", 1, 3000)],
        1,
    );

    let universe = test_universe(&test);
    let military_positions = universe
        .positions(PositionCategory::Player, PositionKind::Military)
        .await?;
    let economy_positions = universe
        .positions(PositionCategory::Player, PositionKind::Economy)
        .await?;

    match &military_positions[0] {
        Position::MilitaryPlayer(entry) => assert_eq!(entry.ships, 120),
        other => panic!("expected a military player position, got {:?}", other),
    }
    match &economy_positions[0] {
        Position::Player(entry) => assert_eq!(entry.score, 3000),
        other => panic!("expected a player position, got {:?}", other),
    }
    military.assert();
    economy.assert();

    Ok(())
}

/// Expect the same category fetched twice to be requested twice
#[tokio::test]
async fn every_call_refetches() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test
        .ogame()
        .with_planets_endpoint(vec![factory::mock_planet("1", "100", "1:1:1")], 2);

    let universe = test_universe(&test);
    let first = universe.planets().await?;
    let second = universe.planets().await?;

    assert_eq!(first, second);
    endpoint.assert();

    Ok(())
}

/// Expect a nearby universe handle to use the href it was listed with
#[tokio::test]
async fn nearby_universe_uses_listed_endpoint() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test.ogame().with_universes_endpoint(
        &[("152", "https://s152-en.ogame.gameforge.com/api")],
        1,
    );

    let universe = test_universe(&test);
    let nearby = universe.nearby_universes().await?;

    assert_eq!(nearby[0].id, "152");
    assert_eq!(
        nearby[0].universe().endpoint(),
        "https://s152-en.ogame.gameforge.com/api"
    );
    endpoint.assert();

    Ok(())
}
