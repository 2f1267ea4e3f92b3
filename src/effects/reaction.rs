//! Two tone animation effect based on key presses
//!
//! Pressed keys light up with the configured color and fade back to the
//! background over a speed-controlled window.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, error};
use validator::Validate;

use crate::color::{color_scheme, GradientTable, GRADIENT_STEPS};
use crate::effects::{Frame, Renderer};
use crate::input::{InputQueue, KeyInputEvent};
use crate::layer::Layer;
use crate::models::{Color, ConfigUpdate, ReactionConfig, RendererMeta};

/// Data bag key under which the resolved fade color is cached
pub const REACTION_COLOR_KEY: &str = "reaction_color";

/// Below this decay progress the fade snaps to the background color, so the
/// last visible frame of a key lands exactly on the resting color
const FADE_SNAP_THRESHOLD: f32 = 0.15;

const META: RendererMeta = RendererMeta {
    name: "Reaction",
    description: "Keys change color when pressed",
    author: "keylight authors",
    version: "1.0",
};

/// Reaction lighting effect
///
/// Construction initializes every field to a valid default (speed 6, black
/// background, white active color) and builds the gradient before any
/// configuration update can arrive, so there is no partially-initialized
/// window to guard against.
pub struct Reaction {
    config: ReactionConfig,
    gradient: Option<GradientTable>,
    key_expire_time: Duration,
    input: Option<InputQueue>,
    rebuilds: u64,
}

impl Reaction {
    /// Create the effect over the device's input queue
    ///
    /// `input` is `None` when the device cannot produce key events; `init`
    /// then declines to activate the effect.
    pub fn new(input: Option<InputQueue>) -> Self {
        let config = ReactionConfig::default();

        let mut this = Self {
            key_expire_time: Duration::from_secs_f32(config.key_expire_time()),
            config,
            gradient: None,
            input,
            rebuilds: 0,
        };

        this.rebuild_gradient();
        this.sync_expire_time();
        this
    }

    pub fn config(&self) -> &ReactionConfig {
        &self.config
    }

    /// True if the device is capable of producing key events
    pub fn has_key_input(&self) -> bool {
        self.input.is_some()
    }

    /// Host-side handle used to drive the effect in tests and demos
    pub fn input_mut(&mut self) -> Option<&mut InputQueue> {
        self.input.as_mut()
    }

    /// Apply a configuration transaction
    ///
    /// All changed fields are applied before anything is recomputed: the
    /// expire time is derived once on a speed change and the gradient table
    /// is rebuilt at most once however many color fields the update carries.
    pub fn update_config(&mut self, update: &ConfigUpdate) {
        let changes = self.config.apply(update);

        if changes.speed {
            self.key_expire_time = Duration::from_secs_f32(self.config.key_expire_time());
            self.sync_expire_time();
        }

        if changes.colors {
            self.rebuild_gradient();
        }
    }

    fn sync_expire_time(&mut self) {
        let key_expire_time = self.key_expire_time;

        if let Some(input) = self.input.as_mut() {
            input.set_expire_time(key_expire_time);
        }
    }

    fn rebuild_gradient(&mut self) {
        // Opaque black is the "unset" sentinel; drop it so the color layer
        // derives a default companion background
        let background_color = if self.config.background_color == Color::new(0, 0, 0) {
            None
        } else {
            Some(self.config.background_color)
        };

        self.gradient = Some(color_scheme(
            Some(self.config.color),
            background_color,
            GRADIENT_STEPS,
        ));

        self.rebuilds += 1;
        debug!(rebuilds = self.rebuilds, "rebuilt gradient table");
    }

    /// Resolve the fade color for a decay progress value
    ///
    /// `percent_complete` runs from 1.0 (just pressed, table head) toward
    /// 0.0. At or below the snap threshold the background color is returned
    /// directly instead of a gradient sample.
    fn fade_color(&self, percent_complete: f32) -> Option<Color> {
        let table = self.gradient.as_ref()?;

        if percent_complete <= FADE_SNAP_THRESHOLD {
            return Some(self.config.background_color);
        }

        let steps = table.len() as f32;
        let index = (steps - percent_complete * steps) as usize;
        table.get(index)
    }

    fn resolve_color(&self, event: &mut KeyInputEvent, now: Instant) -> Option<Color> {
        if let Some(&color) = event.data.get(REACTION_COLOR_KEY) {
            return Some(color);
        }

        let color = self.fade_color(event.percent_complete(now))?;
        event.data.insert(REACTION_COLOR_KEY, color);
        Some(color)
    }

    fn react_keys(&self, layer: &mut Layer, event: &KeyInputEvent, color: Color) {
        for coord in &event.coords {
            layer.put(coord.row, coord.col, color);
        }
    }

    fn process_events(&mut self, layer: &mut Layer, events: &mut [KeyInputEvent], now: Instant) {
        if self.gradient.is_none() {
            // Configuration not applied yet; self-corrects once it is
            return;
        }

        for event in events {
            if event.coords.is_empty() {
                error!(event = ?event, "no coordinates available");
                continue;
            }

            if let Some(color) = self.resolve_color(event, now) {
                self.react_keys(layer, event, color);
            }
        }
    }
}

#[async_trait]
impl Renderer for Reaction {
    fn meta(&self) -> &RendererMeta {
        &META
    }

    fn init(&mut self, _frame: &Frame) -> bool {
        if !self.has_key_input() {
            return false;
        }

        self.sync_expire_time();
        true
    }

    async fn draw(&mut self, layer: &mut Layer, timestamp: Instant) -> bool {
        let input = match self.input.as_mut() {
            Some(input) => input,
            None => return false,
        };

        // Yield until the queue becomes active
        let mut events = match input.get_events().await {
            Ok(events) => events,
            Err(err) => {
                debug!(error = %err, "input queue closed");
                return false;
            }
        };

        if events.is_empty() {
            return false;
        }

        self.process_events(layer, &mut events, timestamp);
        true
    }
}

/// Validate an incoming configuration transaction before it reaches the
/// effect
///
/// The effect itself assumes validated input.
pub fn validate_update(update: &ConfigUpdate) -> Result<(), validator::ValidationErrors> {
    update.validate()
}
