//! Shared test helpers.

use gear_planner::codec::base64url;
use gear_planner::ItemDb;

/// Small database with the enchants used by the tests.
#[allow(dead_code)]
pub fn test_db() -> ItemDb {
    ItemDb::from_json(
        r#"{
            "enchants": {
                "256": 999,
                "20034": 1900,
                "20025": 1891,
                "13947": 1887
            }
        }"#,
    )
    .expect("test database should parse")
}

/// Wrap a raw payload in a gear planner link.
#[allow(dead_code)]
pub fn planner_url(class: &str, race: &str, payload: &[u8]) -> String {
    format!(
        "https://www.wowhead.com/classic/gear-planner/{}/{}/{}",
        class,
        race,
        base64url::encode(payload)
    )
}
