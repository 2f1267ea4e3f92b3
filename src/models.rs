use serde_derive::{Deserialize, Serialize};
use validator::Validate;

pub type Color = palette::rgb::LinSrgb<u8>;

/// Highest configurable effect speed
pub const MAX_SPEED: u32 = 9;
/// Speed applied when the user has not picked one
pub const DEFAULT_SPEED: u32 = 6;

const EXPIRE_TIME_FACTOR: f32 = 0.25;

/// Static informational block describing an effect renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RendererMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

fn default_speed() -> u32 {
    DEFAULT_SPEED
}

fn default_background_color() -> Color {
    Color::new(0, 0, 0)
}

fn default_color() -> Color {
    Color::new(255, 255, 255)
}

/// Settings for the reaction effect
///
/// Colors deserialize from strings (`#RRGGBB` hex or CSS names). Speed is
/// validated into `[1, 9]` at this layer; effects assume validated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReactionConfig {
    #[serde(default = "default_speed")]
    #[validate(range(min = 1, max = 9))]
    pub speed: u32,
    #[serde(default = "default_background_color", with = "crate::serde::color_string")]
    pub background_color: Color,
    #[serde(default = "default_color", with = "crate::serde::color_string")]
    pub color: Color,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            background_color: default_background_color(),
            color: default_color(),
        }
    }
}

impl ReactionConfig {
    /// Duration in seconds a key's color animation takes to fully decay
    ///
    /// Higher speed means a shorter expire time.
    pub fn key_expire_time(&self) -> f32 {
        (MAX_SPEED + 1 - self.speed) as f32 * EXPIRE_TIME_FACTOR
    }

    /// Apply a partial update, returning which aspects changed
    ///
    /// All fields of the update are applied before the caller reacts to the
    /// returned [`ConfigChanges`], so a transaction touching both colors
    /// triggers a single gradient rebuild.
    pub fn apply(&mut self, update: &ConfigUpdate) -> ConfigChanges {
        let mut changes = ConfigChanges::default();

        if let Some(speed) = update.speed {
            self.speed = speed;
            changes.speed = true;
        }

        if let Some(background_color) = update.background_color {
            self.background_color = background_color;
            changes.colors = true;
        }

        if let Some(color) = update.color {
            self.color = color;
            changes.colors = true;
        }

        changes
    }

    /// Declared configuration schema for host-side validation and UI generation
    pub fn schema() -> Vec<ConfigOption> {
        vec![
            ConfigOption {
                name: "speed",
                kind: ConfigOptionKind::Int,
                min: Some(1),
                max: Some(MAX_SPEED),
                default: DEFAULT_SPEED.into(),
            },
            ConfigOption {
                name: "background_color",
                kind: ConfigOptionKind::Color,
                min: None,
                max: None,
                default: "#000000".into(),
            },
            ConfigOption {
                name: "color",
                kind: ConfigOptionKind::Color,
                min: None,
                max: None,
                default: "#ffffff".into(),
            },
        ]
    }
}

/// Sparse configuration update, as sent by the host's settings UI
///
/// Absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ConfigUpdate {
    #[serde(default)]
    #[validate(range(min = 1, max = 9))]
    pub speed: Option<u32>,
    #[serde(default, with = "crate::serde::opt_color_string")]
    pub background_color: Option<Color>,
    #[serde(default, with = "crate::serde::opt_color_string")]
    pub color: Option<Color>,
}

/// Aspects of a [`ReactionConfig`] touched by an update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChanges {
    pub speed: bool,
    pub colors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOptionKind {
    Int,
    Color,
}

/// One entry of the declared configuration schema
#[derive(Debug, Clone, Serialize)]
pub struct ConfigOption {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ConfigOptionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub default: serde_json::Value,
}
