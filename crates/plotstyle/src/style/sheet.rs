//! Named style sheets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::StyleError;

/// A named preset bundle of display defaults.
///
/// A sheet only contributes the values the explicit configuration leaves
/// open: background, axis edge and grid colors. Everything else in a
/// [`DisplayConfiguration`](super::DisplayConfiguration) overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StyleSheet {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "seaborn-white", alias = "seaborn-v0_8-white")]
    SeabornWhite,
    #[serde(rename = "seaborn-whitegrid", alias = "seaborn-v0_8-whitegrid")]
    SeabornWhitegrid,
    #[serde(rename = "seaborn-paper", alias = "seaborn-v0_8-paper")]
    SeabornPaper,
    #[serde(rename = "dark_background")]
    DarkBackground,
}

/// Colors a style sheet fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetColors {
    pub face: Color,
    pub edge: Color,
    pub grid: Color,
}

impl StyleSheet {
    pub const ALL: [StyleSheet; 5] = [
        StyleSheet::Default,
        StyleSheet::SeabornWhite,
        StyleSheet::SeabornWhitegrid,
        StyleSheet::SeabornPaper,
        StyleSheet::DarkBackground,
    ];

    /// The name the plotting library knows this sheet by.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleSheet::Default => "default",
            StyleSheet::SeabornWhite => "seaborn-white",
            StyleSheet::SeabornWhitegrid => "seaborn-whitegrid",
            StyleSheet::SeabornPaper => "seaborn-paper",
            StyleSheet::DarkBackground => "dark_background",
        }
    }

    pub fn colors(&self) -> SheetColors {
        match self {
            StyleSheet::Default | StyleSheet::SeabornPaper => SheetColors {
                face: Color::from_u32(0xffffff),
                edge: Color::from_u32(0x000000),
                grid: Color::from_u32(0xb0b0b0),
            },
            StyleSheet::SeabornWhite => SheetColors {
                face: Color::from_u32(0xffffff),
                edge: Color::from_u32(0x262626),
                grid: Color::from_u32(0xcccccc),
            },
            StyleSheet::SeabornWhitegrid => SheetColors {
                face: Color::from_u32(0xffffff),
                edge: Color::from_u32(0xcccccc),
                grid: Color::from_u32(0xcccccc),
            },
            StyleSheet::DarkBackground => SheetColors {
                face: Color::from_u32(0x000000),
                edge: Color::from_u32(0xffffff),
                grid: Color::from_u32(0xffffff),
            },
        }
    }
}

impl FromStr for StyleSheet {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Newer matplotlib releases prefix the seaborn sheets with "seaborn-v0_8-".
        let name = s.trim();
        let name = match name.strip_prefix("seaborn-v0_8-") {
            Some(rest) => format!("seaborn-{}", rest),
            None => name.to_string(),
        };
        StyleSheet::ALL
            .into_iter()
            .find(|sheet| sheet.as_str() == name)
            .ok_or_else(|| StyleError::UnknownStyleSheet {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
