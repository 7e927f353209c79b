use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 24-bit color token. Displays and (de)serializes as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub [u8; 3]);

/// Palette used when no params are given.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color([0xE6, 0x39, 0x46]),
    Color([0xF4, 0xA2, 0x61]),
    Color([0xE9, 0xC4, 0x6A]),
    Color([0x2A, 0x9D, 0x8F]),
    Color([0x26, 0x46, 0x53]),
    Color([0x45, 0x7B, 0x9D]),
    Color([0x8E, 0x44, 0xAD]),
    Color([0x6A, 0x99, 0x4E]),
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must be 7 characters like #RRGGBB, got {0:?}")]
    Length(String),
    #[error("color must start with '#', got {0:?}")]
    MissingHash(String),
    #[error("invalid hex digits in {0:?}")]
    Hex(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn rgba(self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], 255]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(s.to_string()));
        };
        if hex.len() != 6 {
            return Err(ColorParseError::Length(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Hex(s.to_string()));
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::Hex(s.to_string()))?;
        Ok(Self([(v >> 16) as u8, (v >> 8) as u8, v as u8]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_tokens() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#00ff7f".parse::<Color>().unwrap(), Color::rgb(0, 255, 127));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!("FF0000".parse::<Color>(), Err(ColorParseError::MissingHash(_))));
        assert!(matches!("#FFF".parse::<Color>(), Err(ColorParseError::Length(_))));
        assert!(matches!("#GG0000".parse::<Color>(), Err(ColorParseError::Hex(_))));
        // sign characters slip past from_str_radix otherwise
        assert!("#+12345".parse::<Color>().is_err());
    }

    #[test]
    fn displays_uppercase() {
        assert_eq!(Color::rgb(0x0a, 0xbc, 0xde).to_string(), "#0ABCDE");
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0, 0, 255)).unwrap();
        assert_eq!(json, "\"#0000FF\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(0, 0, 255));
    }
}
