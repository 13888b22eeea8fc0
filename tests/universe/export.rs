use ogame_api::{Error, PositionCategory, PositionKind};
use ogame_test_utils::prelude::*;
use serde_json::json;

use crate::test_universe;

/// Expect references to serialize as their identifiers
#[tokio::test]
async fn player_exports_alliance_id() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test
        .ogame()
        .with_players_endpoint(vec![factory::mock_player("100", Some("500"))], 1);

    let universe = test_universe(&test);
    let players = universe.players().await?;
    let exported = serde_json::to_value(&players[0]).expect("Failed to serialize player");

    assert_eq!(
        exported,
        json!({
            "id": "100",
            "name": "Commander 100",
            "status": null,
            "alliance": "500",
            "timestamp": "2023-11-14T22:13:20Z",
        })
    );
    endpoint.assert();

    Ok(())
}

/// Expect leaderboard entries to export with their shape tag
#[tokio::test]
async fn positions_export_shape_tag() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test.ogame().with_highscore_endpoint(
        2,
        0,
        vec![factory::mock_position("500", 1, 90000)],
        1,
    );

    let universe = test_universe(&test);
    let positions = universe
        .positions(PositionCategory::Alliance, PositionKind::Total)
        .await?;
    let exported = serde_json::to_value(&positions).expect("Failed to serialize positions");

    assert_eq!(exported[0]["shape"], "alliance");
    assert_eq!(exported[0]["alliance"], "500");
    assert_eq!(exported[0]["score"], 90000);
    endpoint.assert();

    Ok(())
}
