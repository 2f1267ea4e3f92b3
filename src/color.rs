//! Color helpers shared across effects

use palette::{FromColor, Hsl, Hsluv, Mix, ShiftHue, Srgb};

use crate::models::Color;

mod utils;
pub use utils::{increase_contrast, parse_color, ColorError};

/// Number of steps in a [`GradientTable`] built for an effect
pub const GRADIENT_STEPS: usize = 100;

/// Precomputed ordered sequence of colors interpolated between two endpoints
///
/// Interpolation happens in HSLuv space with shortest-path hue mixing. The
/// table is immutable once built; configuration changes swap in a new table
/// instead of mutating the current one, so a reader mid-frame always sees a
/// complete table.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    colors: Vec<Color>,
}

impl GradientTable {
    /// Build a table of `steps` colors running from `start` to `end`
    pub fn new(start: Color, end: Color, steps: usize) -> Self {
        let start = Hsluv::from_color(utils::to_float(start));
        let end = Hsluv::from_color(utils::to_float(end));

        let colors = (0..steps)
            .map(|step| {
                let amount = if steps > 1 {
                    step as f32 / (steps - 1) as f32
                } else {
                    0.0
                };

                utils::from_float(Srgb::from_color(start.mix(end, amount)))
            })
            .collect();

        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Derive a contrasting companion for a single-color scheme
///
/// The input is contrast-corrected first so near-black and near-white colors
/// still produce a visible companion, then rotated around the hue circle.
fn complement(color: Color) -> Color {
    let hsl = Hsl::from_color(utils::to_float(increase_contrast(color)));
    utils::from_float(Srgb::from_color(hsl.shift_hue(150.0)))
}

/// Build a two tone gradient table from an optional color pair
///
/// When one endpoint is missing, a companion is derived from the other one;
/// with neither set the table falls back to white over black.
pub fn color_scheme(color: Option<Color>, base_color: Option<Color>, steps: usize) -> GradientTable {
    match (color, base_color) {
        (Some(color), Some(base_color)) => GradientTable::new(color, base_color, steps),
        (Some(color), None) => GradientTable::new(color, complement(color), steps),
        (None, Some(base_color)) => GradientTable::new(complement(base_color), base_color, steps),
        (None, None) => GradientTable::new(Color::new(255, 255, 255), Color::new(0, 0, 0), steps),
    }
}
