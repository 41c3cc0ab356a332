use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Number of independent sound-effect channels on the sound chip.
pub const CHANNEL_COUNT: usize = 3;

macro_rules! keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Key identifier as reported by the keyboard driver.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant),*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Key> {
                match name {
                    $($name => Some(Key::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",
    Num0 => "0", Num1 => "1", Num2 => "2", Num3 => "3", Num4 => "4",
    Num5 => "5", Num6 => "6", Num7 => "7", Num8 => "8", Num9 => "9",
    Space => "Space",
    Return => "Return",
    Esc => "Esc",
    Tab => "Tab",
    Del => "Del",
    CursorUp => "Up",
    CursorDown => "Down",
    CursorLeft => "Left",
    CursorRight => "Right",
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key `{}`", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    TogglePause,
    NextTrack,
    PlaySfx,
    ToggleChannel,
    AdjustVolume,
}

/// One key, one action, one bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    pub action: ActionKind,
    #[serde(default)]
    pub param: i8,
}

impl KeyBinding {
    pub const fn new(key: Key, action: ActionKind, param: i8) -> Self {
        Self { key, action, param }
    }
}

/// Static text placed on screen. `x` is a byte column, `y` a pixel line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: u8,
    pub y: u8,
}

impl Label {
    pub fn new(text: impl Into<String>, x: u8, y: u8) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: Label,
    /// Opaque identifier handed to the player when the song starts.
    pub track: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenLabels {
    pub now_playing: Label,
    pub next: Label,
    pub pause: Label,
    pub toggle_channels: Label,
    pub channels: [Label; CHANNEL_COUNT],
    pub sfx: Label,
    pub volume: Label,
}

impl Default for ScreenLabels {
    fn default() -> Self {
        Self {
            now_playing: Label::new("Now Playing: ", 2, 0),
            next: Label::new("[N] Next", 2, 12),
            pause: Label::new("[P] Pause", 2, 22),
            toggle_channels: Label::new("TOGGLE SFX CHANNELS:", 2, 68),
            channels: [
                Label::new("Ch0[Q]", 43, 58),
                Label::new("Ch1[W]", 43, 68),
                Label::new("Ch2[E]", 43, 78),
            ],
            sfx: Label::new("PLAY SFX: [1] [2] [3] [4] [5]", 2, 128),
            volume: Label::new("SFX VOLUME -[I] +[O]:", 2, 150),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub x: u8,
    pub y: u8,
}

impl Default for VolumeBar {
    fn default() -> Self {
        Self { x: 45, y: 150 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub songs: Vec<Song>,
    pub sfx_bank: String,
    /// Checked in this order every frame.
    pub bindings: Vec<KeyBinding>,
    pub labels: ScreenLabels,
    pub volume_bar: VolumeBar,
}

pub fn default_bindings() -> Vec<KeyBinding> {
    use ActionKind::*;
    vec![
        KeyBinding::new(Key::P, TogglePause, 0),
        KeyBinding::new(Key::Num1, PlaySfx, 1),
        KeyBinding::new(Key::Num2, PlaySfx, 2),
        KeyBinding::new(Key::Num3, PlaySfx, 3),
        KeyBinding::new(Key::Num4, PlaySfx, 4),
        KeyBinding::new(Key::Num5, PlaySfx, 5),
        KeyBinding::new(Key::Q, ToggleChannel, 0),
        KeyBinding::new(Key::W, ToggleChannel, 1),
        KeyBinding::new(Key::E, ToggleChannel, 2),
        // Volume is stored as attenuation: +1 is quieter.
        KeyBinding::new(Key::I, AdjustVolume, 1),
        KeyBinding::new(Key::O, AdjustVolume, -1),
        KeyBinding::new(Key::N, NextTrack, 0),
    ]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            songs: vec![
                Song {
                    name: Label::new("A Harmless Grenade", 28, 0),
                    track: "grenade".to_string(),
                },
                Song {
                    // Padded so it overwrites the longer name.
                    name: Label::new("Empty             ", 28, 0),
                    track: "empty".to_string(),
                },
            ],
            sfx_bank: "sfx".to_string(),
            bindings: default_bindings(),
            labels: ScreenLabels::default(),
            volume_bar: VolumeBar::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_unique_and_parse_back() {
        for &key in Key::ALL {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
        let mut names: Vec<_> = Key::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Key::ALL.len());
    }

    #[test]
    fn unknown_key_name_is_rejected() {
        let err = "F13".parse::<Key>().unwrap_err();
        assert_eq!(err.to_string(), "unknown key `F13`");

        let json = r#"{"key":"F13","action":"play_sfx","param":1}"#;
        assert!(serde_json::from_str::<KeyBinding>(json).is_err());
    }

    #[test]
    fn binding_serialization_uses_key_name_and_snake_case_action() {
        let binding = KeyBinding::new(Key::Num3, ActionKind::PlaySfx, 3);

        let json = serde_json::to_value(binding).unwrap();
        assert_eq!(json["key"], "3");
        assert_eq!(json["action"], "play_sfx");
        assert_eq!(json["param"], 3);
    }

    #[test]
    fn binding_param_defaults_to_zero() {
        let json = r#"{"key":"N","action":"next_track"}"#;
        let binding: KeyBinding = serde_json::from_str(json).unwrap();
        assert_eq!(binding, KeyBinding::new(Key::N, ActionKind::NextTrack, 0));
    }

    #[test]
    fn default_config_survives_json() {
        let config = DemoConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let json = r#"{ "sfx_bank": "custom" }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.sfx_bank, "custom");
        assert_eq!(config.songs.len(), 2);
        assert_eq!(config.bindings, default_bindings());
        assert_eq!(config.labels, ScreenLabels::default());
    }

    #[test]
    fn default_bindings_cover_twelve_distinct_keys() {
        let bindings = default_bindings();
        assert_eq!(bindings.len(), 12);
        let mut keys: Vec<_> = bindings.iter().map(|b| b.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 12);
    }
}
