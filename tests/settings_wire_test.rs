//! The settings record a persistence layer would store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tui_memory::types::{GameConfig, GridSize, PlayerCount, Theme, SETTINGS_KEY};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Store {
    #[serde(flatten)]
    entries: BTreeMap<String, GameConfig>,
}

#[test]
fn config_round_trips_under_settings_key() {
    let config = GameConfig::new(PlayerCount::new(2).unwrap(), Theme::Icons, GridSize::Six);
    let mut entries = BTreeMap::new();
    entries.insert(SETTINGS_KEY.to_string(), config);
    let store = Store { entries };

    let json = serde_json::to_string(&store).unwrap();
    assert_eq!(
        json,
        r#"{"memory-game-settings":{"numberOfPlayers":2,"theme":"icons","gridSize":6}}"#
    );

    let back: Store = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store);
}

#[test]
fn stored_settings_with_bad_values_are_rejected() {
    for raw in [
        r#"{"numberOfPlayers":0,"theme":"numbers","gridSize":4}"#,
        r#"{"numberOfPlayers":1,"theme":"emoji","gridSize":4}"#,
        r#"{"numberOfPlayers":1,"theme":"numbers","gridSize":8}"#,
    ] {
        assert!(serde_json::from_str::<GameConfig>(raw).is_err(), "{raw}");
    }
}
