//! Color parsing and adjustment utilities

use palette::{FromColor, Hsl, Srgb};
use thiserror::Error;

use crate::models::Color;

#[derive(Debug, Error)]
pub enum ColorError {
    /// Hex string could not be parsed
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    /// Color name is not a known CSS color
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// Parse a color from `#RRGGBB` / `#RGB` hex or a CSS color name
pub fn parse_color(value: &str) -> Result<Color, ColorError> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(value.to_owned()));
    }

    if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        if let Some(color) = parse_hex(value) {
            return Ok(color);
        }
    }

    palette::named::from_str(&value.to_lowercase())
        .map(|named| Color::new(named.red, named.green, named.blue))
        .ok_or_else(|| ColorError::UnknownName(value.to_owned()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::new(channels.next()??, channels.next()??, channels.next()??))
        }
        6 => {
            let channel = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
            Some(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => None,
    }
}

/// Flip lightness when a derived scheme would be white-on-white or
/// black-on-black
pub fn increase_contrast(color: Color) -> Color {
    let mut hsl = Hsl::from_color(to_float(color));

    if hsl.lightness < 0.1 || hsl.lightness > 0.7 {
        hsl.lightness = 1.0 - hsl.lightness;
    }

    from_float(Srgb::from_color(hsl))
}

pub(crate) fn to_float(color: Color) -> Srgb<f32> {
    let (red, green, blue) = color.into_components();
    Srgb::new(red, green, blue).into_format()
}

pub(crate) fn from_float(color: Srgb<f32>) -> Color {
    let (red, green, blue) = color.into_format::<u8>().into_components();
    Color::new(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("#FF8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(parse_color("#fff").unwrap(), Color::new(255, 255, 255));
        assert_eq!(parse_color("00ff00").unwrap(), Color::new(0, 255, 0));
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("White").unwrap(), Color::new(255, 255, 255));
        assert_eq!(parse_color("skyblue").unwrap(), Color::new(135, 206, 235));
    }

    #[test]
    fn parse_invalid_colors() {
        assert!(matches!(
            parse_color("#ff00"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_color("#GGGGGG"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_color("not-a-color"),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn increase_contrast_flips_extremes() {
        // Mid-lightness colors pass through untouched
        assert_eq!(
            increase_contrast(Color::new(255, 0, 0)),
            Color::new(255, 0, 0)
        );

        // White and black get flipped away from their extreme
        let flipped_white = increase_contrast(Color::new(255, 255, 255));
        assert!(flipped_white.red < 128);

        let flipped_black = increase_contrast(Color::new(0, 0, 0));
        assert!(flipped_black.red > 128);
    }
}
