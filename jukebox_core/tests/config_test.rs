use jukebox_core::config::{load_config_from_path, load_config_from_str, validate};
use jukebox_core::error::ConfigError;
use jukebox_schema::{ActionKind, DemoConfig, Key, KeyBinding, Label};
use std::{env, fs};

#[test]
fn default_config_is_valid() {
    assert_eq!(validate(&DemoConfig::default()), Ok(()));
}

#[test]
fn empty_song_list_is_rejected() {
    let config = DemoConfig {
        songs: vec![],
        ..DemoConfig::default()
    };
    assert_eq!(validate(&config), Err(ConfigError::NoSongs));
}

#[test]
fn channel_parameter_must_name_a_channel() {
    let mut config = DemoConfig::default();
    config
        .bindings
        .push(KeyBinding::new(Key::R, ActionKind::ToggleChannel, 3));

    let err = validate(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ChannelOutOfRange {
            index: 12,
            key: Key::R,
            channel: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "binding 12 (R): channel 3 is out of range (0..3)"
    );
}

#[test]
fn sfx_ids_start_at_one() {
    let mut config = DemoConfig::default();
    config.bindings[1].param = 0;

    assert_eq!(
        validate(&config),
        Err(ConfigError::InvalidSfxId {
            index: 1,
            key: Key::Num1,
            id: 0,
        })
    );
}

#[test]
fn a_key_can_only_be_bound_once() {
    let mut config = DemoConfig::default();
    config
        .bindings
        .push(KeyBinding::new(Key::P, ActionKind::NextTrack, 0));

    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "key P is bound twice (bindings 0 and 12)"
    );
}

#[test]
fn labels_must_fit_on_screen() {
    let mut config = DemoConfig::default();
    config.labels.sfx = Label::new("PLAY SFX: [1] [2] [3] [4] [5]", 30, 128);

    assert!(matches!(
        validate(&config),
        Err(ConfigError::LabelOffScreen { x: 30, y: 128, .. })
    ));

    let mut config = DemoConfig::default();
    config.volume_bar.x = 60;
    assert!(validate(&config).is_err());
}

#[test]
fn very_long_labels_are_off_screen() {
    for len in [40_000, 65_537] {
        let mut config = DemoConfig::default();
        config.labels.sfx = Label::new("X".repeat(len), 2, 128);

        assert!(
            matches!(
                validate(&config),
                Err(ConfigError::LabelOffScreen { x: 2, y: 128, .. })
            ),
            "{len} characters"
        );
    }
}

#[test]
fn load_from_str_reports_parse_and_validation_failures() {
    let err = load_config_from_str("{ not json").unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config json"));

    let err = load_config_from_str(r#"{ "songs": [] }"#).unwrap_err();
    assert_eq!(format!("{err:#}"), "invalid config: song list is empty");
}

#[test]
fn load_from_path_reads_json_file() {
    let path = env::temp_dir().join(format!(
        "jukebox_core_config_test_{}.json",
        std::process::id()
    ));
    let mut config = DemoConfig::default();
    config.sfx_bank = "bank2".to_string();
    fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = load_config_from_path(&path).unwrap();
    assert_eq!(loaded, config);

    let _ = fs::remove_file(&path);
    let err = load_config_from_path(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to read config: "));
}
