//! # Plotstyle - publication figure styles and named colors
//!
//! Plotstyle describes how figures should look (fonts, grid lines, figure
//! size, color cycle) as an explicit [`DisplayConfiguration`], and resolves
//! color names such as `"green"` to the color at the same position in the
//! active color cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use plotstyle::{RcWriter, StyleConfigurator, StyleOptions};
//!
//! let mut styles = StyleConfigurator::new(StyleOptions::paper());
//! styles.configure(true);
//!
//! // Series colors by name
//! let red = styles.resolve_color("red").unwrap();
//! assert_eq!(red.to_hex(), "#d62728");
//!
//! // Hand the configuration to the plotting library
//! let rc = RcWriter::new().unwrap().render(styles.config()).unwrap();
//! assert!(rc.contains("font.size: 12\n"));
//! ```
//!
//! ## Concepts
//!
//! - [`StyleOptions`] / [`Preset`]: the values that vary between figure styles
//! - [`DisplayConfiguration`]: every display option, built from options
//! - [`StyleConfigurator`]: applies options and resolves color names
//! - [`Palette`] / [`ColorCycle`]: color names and the colors they index
//! - [`rc`]: an opt-in process-wide active configuration, for scripts
//!
//! ## Color lookup
//!
//! The ten-entry palette is blue, orange, green, red, purple, brown, magenta,
//! grey, yellow, cyan. Unknown names are an error rather than a silent miss:
//!
//! ```rust
//! use plotstyle::{StyleConfigurator, StyleError};
//!
//! let styles = StyleConfigurator::default();
//! assert!(matches!(
//!     styles.resolve_color("teal"),
//!     Err(StyleError::NotFound { .. })
//! ));
//! ```

mod color;
mod configurator;
mod error;
mod palette;
pub mod rc;
mod style;

pub use color::Color;
pub use configurator::StyleConfigurator;
pub use error::{Result, StyleError};
pub use palette::{ColorCycle, Palette, PaletteEntry, STANDARD_NAMES, TAB10};
pub use rc::RcWriter;
pub use style::{
    DisplayConfiguration, FigureSize, FontFamily, Preset, RcKey, SheetColors, StyleOptions,
    StyleSheet, TexSystem, BASE_FIGURE_SIZE, GRID_LINE_WIDTH,
};
