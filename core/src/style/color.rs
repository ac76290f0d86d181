use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::style::palette::PALETTE;
use crate::{Error, Result};

/// Opaque RGB colour accepted by `--fill` / `--bg`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_sq(self, other: Color) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    /// Linear blend: `amount` of `self` over `base`
    pub fn mix_into(self, base: Color, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let ch = |c: u8, b: u8| (b as f32 + (c as f32 - b as f32) * amount).round() as u8;
        Color::rgb(ch(self.r, base.r), ch(self.g, base.g), ch(self.b, base.b))
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
                Some(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        Color::rgb(px[0], px[1], px[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#RGB`, `#RRGGBB` (the `#` is optional), a basic colour name or a palette name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let key = s.to_ascii_lowercase().replace(['_', ' '], "-");

        if let Some((_, color)) = NAMED.iter().find(|(name, _)| *name == key) {
            return Ok(*color);
        }
        if let Some(entry) = PALETTE.iter().find(|e| e.slug() == key) {
            return Ok(entry.color);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        Color::parse_hex(hex).ok_or_else(|| Error::validation(format!("unrecognised colour '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#EC793F".parse::<Color>().unwrap(), Color::rgb(0xEC, 0x79, 0x3F));
        assert_eq!("f8f7ff".parse::<Color>().unwrap(), Color::rgb(0xF8, 0xF7, 0xFF));
        assert_eq!("#fa0".parse::<Color>().unwrap(), Color::rgb(0xFF, 0xAA, 0x00));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!(" white ".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("grey".parse::<Color>().unwrap(), "gray".parse::<Color>().unwrap());
        assert_eq!("Atomic Tangerine".parse::<Color>().unwrap(), Color::rgb(0xEC, 0x79, 0x3F));
        assert_eq!("soft_periwinkle".parse::<Color>().unwrap(), Color::rgb(0xB8, 0xB8, 0xFF));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12345", "#GGGGGG", "ultraviolet", "#1234567", "é"] {
            assert!(matches!(bad.parse::<Color>(), Err(Error::Validation(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_display_is_upper_hex() {
        assert_eq!(Color::rgb(0xEC, 0x79, 0x3F).to_string(), "#EC793F");
        let c: Color = "#9381ff".parse().unwrap();
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn test_mix_and_distance() {
        assert_eq!(Color::BLACK.mix_into(Color::WHITE, 0.0), Color::WHITE);
        assert_eq!(Color::BLACK.mix_into(Color::WHITE, 1.0), Color::BLACK);
        assert_eq!(Color::BLACK.distance_sq(Color::WHITE), 3 * 255 * 255);
        assert_eq!(Color::WHITE.distance_sq(Color::WHITE), 0);
    }
}
