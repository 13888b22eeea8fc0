//! Renders fixture records into documents shaped like the live API.

use quick_xml::escape::escape;

use crate::{
    constant::{TEST_SERVER_ID, TEST_TIMESTAMP},
    fixtures::factory::{MockAlliance, MockPlanet, MockPlayer, MockPosition, MockScore},
};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn envelope() -> String {
    format!(
        r#"timestamp="{}" serverId="{}""#,
        TEST_TIMESTAMP, TEST_SERVER_ID
    )
}

fn attr(key: &str, value: &str) -> String {
    format!(r#" {}="{}""#, key, escape(value))
}

fn optional_attr(key: &str, value: Option<&str>) -> String {
    value.map(|value| attr(key, value)).unwrap_or_default()
}

fn document(root: &str, root_attrs: &str, body: &str) -> String {
    format!(
        "{}\n<{} {}{}>{}</{}>",
        DECLARATION,
        root,
        envelope(),
        root_attrs,
        body,
        root
    )
}

pub fn player_element(player: &MockPlayer) -> String {
    format!(
        "<player{}{}{}{}/>",
        attr("id", &player.id),
        attr("name", &player.name),
        optional_attr("status", player.status.as_deref()),
        optional_attr("alliance", player.alliance.as_deref()),
    )
}

pub fn players_document(players: &[MockPlayer]) -> String {
    let body: String = players.iter().map(player_element).collect();
    document("players", "", &body)
}

pub fn alliance_element(alliance: &MockAlliance) -> String {
    let members: String = alliance
        .members
        .iter()
        .map(|member| format!("<player{}/>", attr("id", member)))
        .collect();

    format!(
        "<alliance{}{}{}{}{}{}{}{}>{}</alliance>",
        attr("id", &alliance.id),
        attr("name", &alliance.name),
        attr("tag", &alliance.tag),
        attr("founder", &alliance.founder),
        optional_attr(
            "foundDate",
            alliance.found_date.map(|date| date.to_string()).as_deref()
        ),
        optional_attr("logo", alliance.logo.as_deref()),
        optional_attr("homepage", alliance.homepage.as_deref()),
        optional_attr("open", alliance.open.as_deref()),
        members,
    )
}

pub fn alliances_document(alliances: &[MockAlliance]) -> String {
    let body: String = alliances.iter().map(alliance_element).collect();
    document("alliances", "", &body)
}

/// Planet element; `with_owner` is false for planets nested in `playerData.xml`.
pub fn planet_element(planet: &MockPlanet, with_owner: bool) -> String {
    let owner = if with_owner {
        attr("player", &planet.player)
    } else {
        String::new()
    };
    let moon = planet
        .moon
        .as_ref()
        .map(|moon| {
            format!(
                "<moon{}{}{}/>",
                attr("id", &moon.id),
                attr("name", &moon.name),
                attr("size", &moon.size.to_string())
            )
        })
        .unwrap_or_default();

    format!(
        "<planet{}{}{}{}>{}</planet>",
        attr("id", &planet.id),
        owner,
        attr("name", &planet.name),
        attr("coords", &planet.coords),
        moon
    )
}

pub fn planets_document(planets: &[MockPlanet]) -> String {
    let body: String = planets
        .iter()
        .map(|planet| planet_element(planet, true))
        .collect();
    document("universe", "", &body)
}

/// `element` is `player` or `alliance` depending on the category.
pub fn highscore_document(
    category: u8,
    kind: u8,
    element: &str,
    positions: &[MockPosition],
) -> String {
    let body: String = positions
        .iter()
        .map(|position| {
            format!(
                "<{}{}{}{}{}/>",
                element,
                attr("position", &position.position.to_string()),
                attr("id", &position.id),
                attr("score", &position.score.to_string()),
                optional_attr("ships", position.ships.map(|s| s.to_string()).as_deref()),
            )
        })
        .collect();

    document(
        "highscore",
        &format!("{}{}", attr("category", &category.to_string()), attr("type", &kind.to_string())),
        &body,
    )
}

pub fn server_data_document(properties: &[(&str, &str)]) -> String {
    let body: String = properties
        .iter()
        .map(|(key, value)| format!("<{}>{}</{}>", key, escape(*value), key))
        .collect();
    document("serverData", "", &body)
}

pub fn localization_document(techs: &[(&str, &str)], missions: &[(&str, &str)]) -> String {
    document(
        "localization",
        "",
        &format!(
            "<techs>{}</techs><missions>{}</missions>",
            names(techs),
            names(missions)
        ),
    )
}

fn names(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(id, name)| format!("<name{}>{}</name>", attr("id", id), escape(*name)))
        .collect()
}

/// `universes` holds `(id, href)` pairs.
pub fn universes_document(universes: &[(&str, &str)]) -> String {
    let body: String = universes
        .iter()
        .map(|(id, href)| format!("<universe{}{}/>", attr("id", id), attr("href", href)))
        .collect();
    document("universes", "", &body)
}

pub fn player_data_document(
    player: &MockPlayer,
    scores: &[MockScore],
    planets: &[MockPlanet],
    alliance: Option<&MockAlliance>,
) -> String {
    let scores: String = scores
        .iter()
        .map(|score| {
            format!(
                "<position{}{}{}>{}</position>",
                attr("type", &score.kind.to_string()),
                attr("score", &score.score.to_string()),
                optional_attr("ships", score.ships.map(|s| s.to_string()).as_deref()),
                score.position
            )
        })
        .collect();
    let planets: String = planets
        .iter()
        .map(|planet| planet_element(planet, false))
        .collect();
    let alliance = alliance
        .map(|alliance| {
            format!(
                "<alliance{}><name>{}</name><tag>{}</tag></alliance>",
                attr("id", &alliance.id),
                escape(&alliance.name),
                escape(&alliance.tag)
            )
        })
        .unwrap_or_default();

    document(
        "playerData",
        &format!("{}{}", attr("id", &player.id), attr("name", &player.name)),
        &format!(
            "<positions>{}</positions><planets>{}</planets>{}",
            scores, planets, alliance
        ),
    )
}
