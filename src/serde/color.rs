use crate::models::Color;

/// Format a color as a `#rrggbb` hex string
pub fn color_to_hex(color: &Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Serde adapter for colors represented as strings
///
/// Accepts `#RRGGBB` / `#RGB` hex and CSS color names.
pub mod color_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::color::parse_color;
    use crate::models::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::color_to_hex(color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_color(&value).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional colors represented as strings
pub mod opt_color_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::color::parse_color;
    use crate::models::Color;

    pub fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_some(&super::color_to_hex(color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|value| parse_color(&value).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(color_to_hex(&Color::new(255, 128, 0)), "#ff8000");
        assert_eq!(color_to_hex(&Color::new(0, 0, 0)), "#000000");
    }
}
