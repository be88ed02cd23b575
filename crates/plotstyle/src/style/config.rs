//! The display configuration and its `matplotlibrc` parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::sheet::StyleSheet;
use crate::error::Result;
use crate::palette::ColorCycle;

/// Parameter names a [`DisplayConfiguration`] sets.
///
/// The order of [`RcKey::ALL`] is the order parameters are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RcKey {
    AxesFaceColor,
    AxesEdgeColor,
    GridColor,
    TextUsetex,
    PgfTexSystem,
    FontFamily,
    FontSize,
    AxesLabelSize,
    AxesGrid,
    GridLineWidth,
    LegendFontSize,
    XtickLabelSize,
    YtickLabelSize,
    FigureSize,
    AxesPropCycle,
}

impl RcKey {
    pub const ALL: [RcKey; 15] = [
        RcKey::AxesFaceColor,
        RcKey::AxesEdgeColor,
        RcKey::GridColor,
        RcKey::TextUsetex,
        RcKey::PgfTexSystem,
        RcKey::FontFamily,
        RcKey::FontSize,
        RcKey::AxesLabelSize,
        RcKey::AxesGrid,
        RcKey::GridLineWidth,
        RcKey::LegendFontSize,
        RcKey::XtickLabelSize,
        RcKey::YtickLabelSize,
        RcKey::FigureSize,
        RcKey::AxesPropCycle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RcKey::AxesFaceColor => "axes.facecolor",
            RcKey::AxesEdgeColor => "axes.edgecolor",
            RcKey::GridColor => "grid.color",
            RcKey::TextUsetex => "text.usetex",
            RcKey::PgfTexSystem => "pgf.texsystem",
            RcKey::FontFamily => "font.family",
            RcKey::FontSize => "font.size",
            RcKey::AxesLabelSize => "axes.labelsize",
            RcKey::AxesGrid => "axes.grid",
            RcKey::GridLineWidth => "grid.linewidth",
            RcKey::LegendFontSize => "legend.fontsize",
            RcKey::XtickLabelSize => "xtick.labelsize",
            RcKey::YtickLabelSize => "ytick.labelsize",
            RcKey::FigureSize => "figure.figsize",
            RcKey::AxesPropCycle => "axes.prop_cycle",
        }
    }
}

impl fmt::Display for RcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    #[default]
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
            FontFamily::Cursive => "cursive",
            FontFamily::Fantasy => "fantasy",
        }
    }
}

/// TeX engine used by the PGF backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TexSystem {
    Pdflatex,
    Xelatex,
    Lualatex,
}

impl TexSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            TexSystem::Pdflatex => "pdflatex",
            TexSystem::Xelatex => "xelatex",
            TexSystem::Lualatex => "lualatex",
        }
    }
}

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// A complete set of display options.
///
/// Values are applied wholesale: there is no partial update, and rendering
/// code receives the whole configuration by reference instead of reading a
/// hidden global. [`Default`] gives the plotting library's own defaults, as
/// seen before any style is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfiguration {
    pub style_sheet: StyleSheet,
    pub text_usetex: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tex_system: Option<TexSystem>,
    pub font_family: FontFamily,
    pub font_size: f64,
    pub axes_label_size: f64,
    pub legend_font_size: f64,
    pub xtick_label_size: f64,
    pub ytick_label_size: f64,
    pub axes_grid: bool,
    pub grid_line_width: f64,
    pub figure_size: FigureSize,
    pub prop_cycle: ColorCycle,
}

impl Default for DisplayConfiguration {
    fn default() -> Self {
        Self {
            style_sheet: StyleSheet::Default,
            text_usetex: false,
            tex_system: None,
            font_family: FontFamily::SansSerif,
            font_size: 10.0,
            axes_label_size: 10.0,
            legend_font_size: 10.0,
            xtick_label_size: 10.0,
            ytick_label_size: 10.0,
            axes_grid: false,
            grid_line_width: 0.8,
            figure_size: FigureSize::new(6.4, 4.8),
            prop_cycle: ColorCycle::tab10(),
        }
    }
}

impl DisplayConfiguration {
    /// Returns the value emitted for `key`, or `None` if this configuration
    /// leaves it unset.
    pub fn rc_value(&self, key: RcKey) -> Option<String> {
        let sheet = self.style_sheet.colors();
        let value = match key {
            RcKey::AxesFaceColor => sheet.face.to_string(),
            RcKey::AxesEdgeColor => sheet.edge.to_string(),
            RcKey::GridColor => sheet.grid.to_string(),
            RcKey::TextUsetex => python_bool(self.text_usetex).to_string(),
            RcKey::PgfTexSystem => self.tex_system?.as_str().to_string(),
            RcKey::FontFamily => self.font_family.as_str().to_string(),
            RcKey::FontSize => self.font_size.to_string(),
            RcKey::AxesLabelSize => self.axes_label_size.to_string(),
            RcKey::AxesGrid => python_bool(self.axes_grid).to_string(),
            RcKey::GridLineWidth => self.grid_line_width.to_string(),
            RcKey::LegendFontSize => self.legend_font_size.to_string(),
            RcKey::XtickLabelSize => self.xtick_label_size.to_string(),
            RcKey::YtickLabelSize => self.ytick_label_size.to_string(),
            RcKey::FigureSize => {
                format!("{}, {}", self.figure_size.width, self.figure_size.height)
            }
            RcKey::AxesPropCycle => self.prop_cycle.to_rc_value(),
        };
        Some(value)
    }

    /// All set parameters in emission order, each key at most once.
    pub fn rc_params(&self) -> Vec<(RcKey, String)> {
        RcKey::ALL
            .into_iter()
            .filter_map(|key| self.rc_value(key).map(|value| (key, value)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
