use ogame_api::{resolve_all, EntityError, Error};
use ogame_test_utils::prelude::*;

use crate::test_universe;

/// Expect a member reference to resolve with a fetch of the players document
#[tokio::test]
async fn resolves_member_reference() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let alliances = test
        .ogame()
        .with_alliances_endpoint(vec![factory::mock_alliance("500", "1", &["1", "2"])], 1);
    let players = test.ogame().with_players_endpoint(
        vec![
            factory::mock_player("1", Some("500")),
            factory::mock_player("2", Some("500")),
        ],
        1,
    );

    let universe = test_universe(&test);
    let alliance = universe.alliance("500").await?;
    let founder = alliance.founder.resolve().await?;

    assert_eq!(founder.name, "Commander 1");
    assert_eq!(
        founder.alliance.as_ref().map(|alliance| alliance.id()),
        Some("500")
    );
    alliances.assert();
    players.assert();

    Ok(())
}

/// Expect NotFound when the referenced player left the universe
#[tokio::test]
async fn dangling_reference_is_not_found() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let alliances = test
        .ogame()
        .with_alliances_endpoint(vec![factory::mock_alliance("500", "1", &["3"])], 1);
    let players = test
        .ogame()
        .with_players_endpoint(vec![factory::mock_player("1", None)], 1);

    let universe = test_universe(&test);
    let alliance = universe.alliance("500").await?;
    let result = alliance.members[0].resolve().await;

    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::NotFound { category: "players", ref id })) if id == "3"
    ));
    alliances.assert();
    players.assert();

    Ok(())
}

/// Expect a planet owner reference to resolve to its player
#[tokio::test]
async fn resolves_planet_owner() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let planets = test
        .ogame()
        .with_planets_endpoint(vec![factory::mock_planet("33620000", "100", "4:20:9")], 1);
    let players = test
        .ogame()
        .with_players_endpoint(vec![factory::mock_player("100", None)], 1);

    let universe = test_universe(&test);
    let planet = universe.planets().await?.remove(0);
    let owner = planet.player.resolve().await?;

    assert_eq!(owner.id, "100");
    planets.assert();
    players.assert();

    Ok(())
}

/// Expect a batch of references from one universe to cost a single fetch
#[tokio::test]
async fn resolve_all_fetches_once_per_universe() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let alliances = test
        .ogame()
        .with_alliances_endpoint(vec![factory::mock_alliance("500", "2", &["2", "1"])], 1);
    let players = test.ogame().with_players_endpoint(
        vec![factory::mock_player("1", None), factory::mock_player("2", None)],
        1,
    );

    let universe = test_universe(&test);
    let alliance = universe.alliance("500").await?;
    let members = resolve_all(&alliance.members).await?;

    let ids: Vec<_> = members.iter().map(|member| member.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    alliances.assert();
    players.assert();

    Ok(())
}

/// Expect a batch to fail as a whole when one reference is missing
#[tokio::test]
async fn resolve_all_fails_on_missing_reference() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let alliances = test
        .ogame()
        .with_alliances_endpoint(vec![factory::mock_alliance("500", "1", &["1", "9"])], 1);
    let players = test
        .ogame()
        .with_players_endpoint(vec![factory::mock_player("1", None)], 1);

    let universe = test_universe(&test);
    let alliance = universe.alliance("500").await?;
    let result = resolve_all(&alliance.members).await;

    assert!(result.as_ref().is_err_and(Error::is_not_found));
    alliances.assert();
    players.assert();

    Ok(())
}
