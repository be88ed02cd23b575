//! Ordered color-name palettes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::cycle::{ColorCycle, TAB10};
use crate::color::Color;
use crate::error::{Result, StyleError};

/// Names of the ten-entry palette, in cycle order.
pub const STANDARD_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "magenta", "grey", "yellow", "cyan",
];

/// One named slot of a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// The color this slot has under the default cycle.
    pub color: Color,
}

impl PaletteEntry {
    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }
}

/// An ordered list of color names.
///
/// An entry's position is what matters: looking up a name yields the color at
/// the same position in whatever [`ColorCycle`] is active, so a palette stays
/// meaningful when a style swaps the cycle.
///
/// # Example
///
/// ```rust
/// use plotstyle::{Color, ColorCycle, Palette};
///
/// let palette = Palette::new()
///     .add("ink", Color::from_u32(0x000000))
///     .add_aliased("accent", &["a"], Color::from_u32(0xd62728));
/// palette.validate().unwrap();
///
/// let cycle = ColorCycle::tab10();
/// assert_eq!(palette.resolve("a", &cycle).unwrap(), cycle.get(1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ten-entry palette: blue, orange, green, red, purple, brown,
    /// magenta, grey, yellow, cyan.
    pub fn standard() -> Self {
        STANDARD_NAMES
            .iter()
            .zip(TAB10)
            .fold(Self::new(), |palette, (name, color)| palette.add(name, color))
    }

    /// The four-entry subset, answering to the single-letter aliases
    /// `b`, `o`, `g` and `r` as well.
    pub fn primary() -> Self {
        Self::new()
            .add_aliased("blue", &["b"], TAB10[0])
            .add_aliased("orange", &["o"], TAB10[1])
            .add_aliased("green", &["g"], TAB10[2])
            .add_aliased("red", &["r"], TAB10[3])
    }

    /// Appends a named entry, returning the palette for chaining.
    ///
    /// Uniqueness is not checked here; call [`Palette::validate`] once the
    /// palette is built.
    pub fn add(self, name: &str, color: Color) -> Self {
        self.add_aliased(name, &[], color)
    }

    /// Appends a named entry that also answers to `aliases`.
    pub fn add_aliased(mut self, name: &str, aliases: &[&str], color: Color) -> Self {
        self.entries.push(PaletteEntry {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            color,
        });
        self
    }

    /// Checks that every name and alias appears only once.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            for name in std::iter::once(&entry.name).chain(&entry.aliases) {
                if !seen.insert(name.as_str()) {
                    return Err(StyleError::DuplicateName { name: name.clone() });
                }
            }
        }
        Ok(())
    }

    /// Returns the cycle position of `name`, matching names and aliases.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.answers_to(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Resolves `name` to the color at its position in `cycle`.
    ///
    /// # Errors
    ///
    /// [`StyleError::NotFound`] if the name is not in the palette, and
    /// [`StyleError::CycleExhausted`] if `cycle` has no color at its position.
    pub fn resolve(&self, name: &str, cycle: &ColorCycle) -> Result<Color> {
        let index = self.position(name).ok_or_else(|| StyleError::NotFound {
            name: name.to_string(),
        })?;
        cycle.get(index).ok_or_else(|| StyleError::CycleExhausted {
            name: name.to_string(),
            index,
            len: cycle.len(),
        })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_order() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.names().collect::<Vec<_>>(), STANDARD_NAMES);
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_standard_entries_carry_default_colors() {
        let palette = Palette::standard();
        let cycle = ColorCycle::default();
        for (i, entry) in palette.entries().iter().enumerate() {
            assert_eq!(Some(entry.color), cycle.get(i));
        }
    }

    #[test]
    fn test_green_is_third_cycle_color() {
        let cycle = ColorCycle::tab10();
        let color = Palette::standard().resolve("green", &cycle).unwrap();
        assert_eq!(color, cycle.get(2).unwrap());
        assert_eq!(color.to_hex(), "#2ca02c");
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let err = Palette::standard()
            .resolve("teal", &ColorCycle::tab10())
            .unwrap_err();
        assert!(matches!(err, StyleError::NotFound { name } if name == "teal"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!Palette::standard().contains("Blue"));
    }

    #[test]
    fn test_primary_aliases() {
        let palette = Palette::primary();
        let cycle = ColorCycle::tab10();
        assert_eq!(palette.len(), 4);
        for (alias, name) in [("b", "blue"), ("o", "orange"), ("g", "green"), ("r", "red")] {
            assert_eq!(
                palette.resolve(alias, &cycle).unwrap(),
                palette.resolve(name, &cycle).unwrap()
            );
        }
        assert!(palette.resolve("purple", &cycle).is_err());
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_resolve_follows_swapped_cycle() {
        let cycle: ColorCycle = ["#000000", "#111111", "#222222"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let color = Palette::standard().resolve("orange", &cycle).unwrap();
        assert_eq!(color.to_hex(), "#111111");
    }

    #[test]
    fn test_short_cycle_is_exhausted() {
        let cycle: ColorCycle = TAB10[..4].iter().copied().collect();
        let err = Palette::standard().resolve("cyan", &cycle).unwrap_err();
        assert!(matches!(
            err,
            StyleError::CycleExhausted { index: 9, len: 4, .. }
        ));
    }

    #[test]
    fn test_validate_duplicate_name() {
        let palette = Palette::new()
            .add("blue", TAB10[0])
            .add("blue", TAB10[1]);
        assert!(matches!(
            palette.validate(),
            Err(StyleError::DuplicateName { name }) if name == "blue"
        ));
    }

    #[test]
    fn test_validate_alias_clashing_with_name() {
        let palette = Palette::new()
            .add("b", TAB10[0])
            .add_aliased("blue", &["b"], TAB10[1]);
        assert!(palette.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "- name: ink\n  color: '#000000'\n- name: paper\n  aliases: [p]\n  color: '#ffffff'\n";
        let palette: Palette = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(palette.position("p"), Some(1));
    }
}
