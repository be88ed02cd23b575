//! Style options and the presets built from them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{DisplayConfiguration, FigureSize, FontFamily, TexSystem};
use super::sheet::StyleSheet;
use crate::error::{Result, StyleError};
use crate::palette::ColorCycle;

/// Single-column figure size in inches, before scaling.
pub const BASE_FIGURE_SIZE: FigureSize = FigureSize::new(4.774, 2.950);

/// Grid line width shared by every preset.
pub const GRID_LINE_WIDTH: f64 = 0.7;

/// The knobs that vary between figure styles.
///
/// Everything else in the resulting [`DisplayConfiguration`] is fixed.
/// Fields missing from a YAML or JSON document take the
/// [`paper`](StyleOptions::paper) values.
///
/// # Example
///
/// ```rust
/// use plotstyle::{StyleOptions, StyleSheet};
///
/// let options = StyleOptions::from_yaml_str("font_size: 11\nfigure_scale: 1.5").unwrap();
/// assert_eq!(options.style_sheet, Some(StyleSheet::SeabornWhite));
///
/// let config = options.build(false);
/// assert_eq!(config.font_size, 11.0);
/// assert!(!config.axes_grid);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Sheet applied underneath the explicit values; `None` keeps the
    /// library default sheet.
    pub style_sheet: Option<StyleSheet>,
    /// Base font size, also used for axis labels.
    pub font_size: f64,
    /// Font size for legends and tick labels.
    pub detail_font_size: f64,
    /// Multiplier applied to [`BASE_FIGURE_SIZE`].
    pub figure_scale: f64,
    pub font_family: FontFamily,
    pub usetex: bool,
    pub tex_system: Option<TexSystem>,
    pub prop_cycle: ColorCycle,
}

impl StyleOptions {
    /// Double-size figures on `seaborn-white`, 12pt text with 10pt details.
    pub fn paper() -> Self {
        Self {
            style_sheet: Some(StyleSheet::SeabornWhite),
            font_size: 12.0,
            detail_font_size: 10.0,
            figure_scale: 2.0,
            font_family: FontFamily::Serif,
            usetex: true,
            tex_system: None,
            prop_cycle: ColorCycle::tab10(),
        }
    }

    /// Like [`paper`](Self::paper) on `seaborn-whitegrid`, with the PGF
    /// backend set to `pdflatex`.
    pub fn notebook() -> Self {
        Self {
            style_sheet: Some(StyleSheet::SeabornWhitegrid),
            tex_system: Some(TexSystem::Pdflatex),
            ..Self::paper()
        }
    }

    /// Single-size figures on the library default sheet, 14pt throughout.
    pub fn compact() -> Self {
        Self {
            style_sheet: None,
            font_size: 14.0,
            detail_font_size: 14.0,
            figure_scale: 1.0,
            ..Self::paper()
        }
    }

    /// Builds the full configuration with grid visibility set to `grid`.
    pub fn build(&self, grid: bool) -> DisplayConfiguration {
        DisplayConfiguration {
            style_sheet: self.style_sheet.unwrap_or_default(),
            text_usetex: self.usetex,
            tex_system: self.tex_system,
            font_family: self.font_family,
            font_size: self.font_size,
            axes_label_size: self.font_size,
            legend_font_size: self.detail_font_size,
            xtick_label_size: self.detail_font_size,
            ytick_label_size: self.detail_font_size,
            axes_grid: grid,
            grid_line_width: GRID_LINE_WIDTH,
            figure_size: BASE_FIGURE_SIZE.scaled(self.figure_scale),
            prop_cycle: self.prop_cycle.clone(),
        }
    }

    /// Checks that sizes and the figure scale are finite and positive.
    ///
    /// The loaders call this; options assembled in code can call it before
    /// [`build`](Self::build).
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("font_size", self.font_size),
            ("detail_font_size", self.detail_font_size),
            ("figure_scale", self.figure_scale),
        ];
        match sizes
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            Some((field, value)) => Err(StyleError::InvalidOption { field, value }),
            None => Ok(()),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a `.json` file, or YAML for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading style options");

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::paper()
    }
}

/// The built-in option sets, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Paper,
    Notebook,
    Compact,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Paper, Preset::Notebook, Preset::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Paper => "paper",
            Preset::Notebook => "notebook",
            Preset::Compact => "compact",
        }
    }

    pub fn options(&self) -> StyleOptions {
        match self {
            Preset::Paper => StyleOptions::paper(),
            Preset::Notebook => StyleOptions::notebook(),
            Preset::Compact => StyleOptions::compact(),
        }
    }
}

impl FromStr for Preset {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| StyleError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
