use crate::geometry::primitives::Rect;
use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the `{w}x{h}` size label in the centre of each piece
    #[serde(default = "default_piece_labels")]
    pub piece_labels: bool,
}

fn default_piece_labels() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            piece_labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub piece_fill: Color,
    pub piece_stroke: Color,
    pub label_fill: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::GLASS
    }
}

impl SvgTheme {
    pub const GLASS: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xFF, 0xFF, 0xFF),
        piece_fill: Color(0xCF, 0xFA, 0xFE), // CYAN 100
        piece_stroke: Color(0x06, 0xB6, 0xD4), // CYAN 500
        label_fill: Color(0x16, 0x4E, 0x63), // CYAN 900
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color: {s}, expected #RRGGBB");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// The `"{w}x{h}"` size label of a piece, rounded to whole millimetres
pub fn size_label(rect: &Rect) -> String {
    format!("{}x{}", rect.w.round(), rect.h.round())
}

pub fn rect(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    let mut rectangle = Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.w)
        .set("height", rect.h);
    for param in params {
        rectangle = rectangle.set(param.0, param.1)
    }
    rectangle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_survives_serde() {
        let color: Color = serde_json::from_str("\"#06B6D4\"").unwrap();
        assert_eq!(color, Color(0x06, 0xB6, 0xD4));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#06B6D4\"");
        assert_eq!(Color::from_str("cffafe").unwrap(), Color(0xCF, 0xFA, 0xFE));
    }

    #[test]
    fn malformed_color_is_rejected() {
        assert!(Color::from_str("#12345").is_err());
        assert!(Color::from_str("#GGGGGG").is_err());
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn options_default_when_missing() {
        let options: SvgDrawOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SvgDrawOptions::default());
        assert!(options.piece_labels);
    }

    #[test]
    fn size_label_rounds() {
        let r = Rect::try_new(0.0, 0.0, 1821.0, 771.6).unwrap();
        assert_eq!(size_label(&r), "1821x772");
    }
}
