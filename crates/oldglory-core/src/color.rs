use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA fill color with channels in `[0, 1]`.
///
/// Serializes as its four channels so a recorded fill survives a round trip
/// exactly; use [`Rgba::to_css_hex`] and `FromStr` for the text form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Unknown color '{0}'")]
    Unknown(String),

    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    /// Half-transparent black used for the drop shadow.
    pub const SHADOW: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.5);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// CSS hex form. Alpha is only written when the color is not opaque.
    pub fn to_css_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    fn parse_hex(s: &str, hex: &str) -> Result<Self, ColorParseError> {
        let bad = || ColorParseError::InvalidHex(s.to_string());
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let nibble = |i: usize| -> Result<u8, ColorParseError> {
            let v = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad())?;
            Ok(v * 17)
        };
        let byte = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad())
        };
        match hex.len() {
            3 => Ok(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Ok(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(trimmed, hex);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "red" => Ok(Rgba::RED),
            "white" => Ok(Rgba::WHITE),
            "blue" => Ok(Rgba::BLUE),
            "black" => Ok(Rgba::BLACK),
            "green" => Ok(Rgba::new(0.0, 1.0, 0.0, 1.0)),
            "yellow" => Ok(Rgba::new(1.0, 1.0, 0.0, 1.0)),
            "gray" | "grey" => Ok(Rgba::new(0.5, 0.5, 0.5, 1.0)),
            "transparent" => Ok(Rgba::TRANSPARENT),
            _ => Err(ColorParseError::Unknown(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!("red".parse::<Rgba>().unwrap(), Rgba::RED);
        assert_eq!(" White ".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("#00f".parse::<Rgba>().unwrap(), Rgba::BLUE);
        assert_eq!("#000000".parse::<Rgba>().unwrap(), Rgba::BLACK);
        let shadow: Rgba = "#00000080".parse().unwrap();
        assert!((shadow.a - 128.0 / 255.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "chartreuse".parse::<Rgba>(),
            Err(ColorParseError::Unknown(_))
        ));
        assert!(matches!(
            "#12345".parse::<Rgba>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#gg0000".parse::<Rgba>(),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_css_hex_output() {
        assert_eq!(Rgba::RED.to_css_hex(), "#ff0000");
        assert_eq!(Rgba::SHADOW.to_css_hex(), "#00000080");
        assert_eq!(Rgba::from_rgba8(12, 34, 56, 255).to_string(), "#0c2238");
    }

    #[test]
    fn test_serde_keeps_channels() {
        let json = serde_json::to_string(&Rgba::SHADOW).unwrap();
        assert_eq!(json, r#"{"r":0.0,"g":0.0,"b":0.0,"a":0.5}"#);
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::SHADOW);

        let odd = Rgba::new(0.1, 0.2, 0.3, 0.25);
        let back: Rgba = serde_json::from_str(&serde_json::to_string(&odd).unwrap()).unwrap();
        assert_eq!(back, odd);
    }
}
