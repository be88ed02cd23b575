//! The active color cycle.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Matplotlib's default "tab10" property cycle.
pub const TAB10: [Color; 10] = [
    Color::from_u32(0x1f77b4),
    Color::from_u32(0xff7f0e),
    Color::from_u32(0x2ca02c),
    Color::from_u32(0xd62728),
    Color::from_u32(0x9467bd),
    Color::from_u32(0x8c564b),
    Color::from_u32(0xe377c2),
    Color::from_u32(0x7f7f7f),
    Color::from_u32(0xbcbd22),
    Color::from_u32(0x17becf),
];

/// Ordered colors assigned to successive plotted series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorCycle {
    colors: Vec<Color>,
}

impl ColorCycle {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn tab10() -> Self {
        Self::new(TAB10.to_vec())
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Formats the cycle the way `matplotlibrc` expects for `axes.prop_cycle`.
    pub fn to_rc_value(&self) -> String {
        let quoted: Vec<String> = self
            .colors
            .iter()
            .map(|c| format!("'{}'", c.to_hex().trim_start_matches('#')))
            .collect();
        format!("cycler('color', [{}])", quoted.join(", "))
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::tab10()
    }
}

impl FromIterator<Color> for ColorCycle {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
