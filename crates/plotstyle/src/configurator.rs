//! Applying a figure style and resolving color names against it.

use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::palette::{ColorCycle, Palette};
use crate::style::{DisplayConfiguration, StyleOptions};

/// Owns a display configuration and the palette used to name its colors.
///
/// A configurator starts out holding the library defaults. [`configure`]
/// replaces them wholesale with the configuration built from its options;
/// nothing outside the configurator is touched, so rendering code receives
/// [`config`] explicitly.
///
/// [`configure`]: StyleConfigurator::configure
/// [`config`]: StyleConfigurator::config
///
/// # Example
///
/// ```rust
/// use plotstyle::{StyleConfigurator, StyleOptions};
///
/// let mut styles = StyleConfigurator::new(StyleOptions::paper());
/// styles.configure(false);
/// assert!(!styles.config().axes_grid);
///
/// let green = styles.resolve_color("green").unwrap();
/// assert_eq!(green.to_hex(), "#2ca02c");
/// assert!(styles.resolve_color("teal").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfigurator {
    options: StyleOptions,
    palette: Palette,
    config: DisplayConfiguration,
}

impl StyleConfigurator {
    /// Creates a configurator for `options` using the ten-entry palette.
    pub fn new(options: StyleOptions) -> Self {
        Self {
            options,
            palette: Palette::standard(),
            config: DisplayConfiguration::default(),
        }
    }

    /// Replaces the palette used by [`resolve_color`](Self::resolve_color).
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DuplicateName`](crate::StyleError::DuplicateName)
    /// if the palette repeats a name or alias.
    pub fn with_palette(mut self, palette: Palette) -> Result<Self> {
        palette.validate()?;
        self.palette = palette;
        Ok(self)
    }

    /// Replaces the color cycle in both the options and the current
    /// configuration.
    pub fn with_cycle(mut self, cycle: ColorCycle) -> Self {
        self.config.prop_cycle = cycle.clone();
        self.options.prop_cycle = cycle;
        self
    }

    /// Overwrites the current configuration with the one built from the
    /// options, grid visibility set to `grid`.
    pub fn configure(&mut self, grid: bool) {
        self.config = self.options.build(grid);
        debug!(
            style_sheet = %self.config.style_sheet,
            font_size = self.config.font_size,
            grid,
            "applied display configuration"
        );
    }

    /// [`configure`](Self::configure) with the grid enabled.
    pub fn configure_default(&mut self) {
        self.configure(true);
    }

    /// Resolves a palette name to the color at its position in the active
    /// cycle.
    ///
    /// # Errors
    ///
    /// [`StyleError::NotFound`](crate::StyleError::NotFound) for names outside
    /// the palette, [`StyleError::CycleExhausted`](crate::StyleError::CycleExhausted)
    /// when the cycle is shorter than the palette.
    pub fn resolve_color(&self, name: &str) -> Result<Color> {
        self.palette.resolve(name, &self.config.prop_cycle)
    }

    pub fn config(&self) -> &DisplayConfiguration {
        &self.config
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for StyleConfigurator {
    fn default() -> Self {
        Self::new(StyleOptions::default())
    }
}
