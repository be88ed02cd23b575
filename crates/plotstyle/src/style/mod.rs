//! Figure style options and the display configuration they produce.
//!
//! - [`StyleOptions`]: the few values that differ between figure styles
//! - [`Preset`]: named option sets (`paper`, `notebook`, `compact`)
//! - [`DisplayConfiguration`]: the complete, explicit set of display options
//! - [`StyleSheet`]: named base sheets
//!
//! Options are collapsed into a configuration with [`StyleOptions::build`];
//! the configuration is then handed to whatever renders or exports figures.

mod config;
mod options;
mod sheet;

pub use config::{DisplayConfiguration, FigureSize, FontFamily, RcKey, TexSystem};
pub use options::{Preset, StyleOptions, BASE_FIGURE_SIZE, GRID_LINE_WIDTH};
pub use sheet::{SheetColors, StyleSheet};
