//! 24-bit display colors in hex notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;
use crate::palette::TAB10;

/// An opaque RGB display color.
///
/// Parses any CSS color (`#rrggbb`, `#rgb`, `#rrggbbaa`, names such as
/// `red`, `rgb(...)`) plus matplotlib's `tab:` names, and always formats as
/// lowercase `#rrggbb`, which is what plotting libraries expect in their
/// parameter files. Alpha is discarded. Serializes as that hex string.
///
/// # Example
///
/// ```rust
/// use plotstyle::Color;
///
/// let blue: Color = "#1F77B4".parse().unwrap();
/// assert_eq!(blue.rgb(), (0x1f, 0x77, 0xb4));
/// assert_eq!(blue.to_string(), "#1f77b4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Some(name) = value.strip_prefix("tab:") {
            return tableau_color(name).ok_or_else(|| StyleError::InvalidColor {
                value: s.to_string(),
                reason: format!("unknown Tableau color '{}'", name),
            });
        }

        // Alpha is dropped: cycle colors are opaque.
        let [r, g, b, _] = csscolorparser::parse(value)
            .map_err(|e| StyleError::InvalidColor {
                value: s.to_string(),
                reason: e.to_string(),
            })?
            .to_rgba8();
        Ok(Color::new(r, g, b))
    }
}

/// Matplotlib's `tab:` names for the entries of [`TAB10`].
fn tableau_color(name: &str) -> Option<Color> {
    const NAMES: [&str; 10] = [
        "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
    ];
    let index = match name {
        "grey" => 7,
        _ => NAMES.iter().position(|n| *n == name)?,
    };
    Some(TAB10[index])
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
