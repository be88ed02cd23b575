//! Process-wide active configuration and `matplotlibrc` export.
//!
//! Scripts that just want "set the figure style once, then look colors up"
//! can use the functions here instead of threading a
//! [`StyleConfigurator`](crate::StyleConfigurator) around. The active
//! configuration starts as the library defaults and only changes through
//! [`configure`], [`configure_with`], [`set_active`] and [`reset`].
//!
//! The state is lock-guarded; concurrent writers do not tear it, and the last
//! writer wins.

mod writer;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::Result;
use crate::palette::Palette;
use crate::style::{DisplayConfiguration, StyleOptions};

pub use writer::RcWriter;

static ACTIVE: Lazy<RwLock<DisplayConfiguration>> =
    Lazy::new(|| RwLock::new(DisplayConfiguration::default()));

static PALETTE: Lazy<Palette> = Lazy::new(Palette::standard);

fn read_active() -> RwLockReadGuard<'static, DisplayConfiguration> {
    ACTIVE.read().unwrap_or_else(|poisoned| {
        warn!("active style lock was poisoned; using last written configuration");
        PoisonError::into_inner(poisoned)
    })
}

fn write_active() -> RwLockWriteGuard<'static, DisplayConfiguration> {
    ACTIVE.write().unwrap_or_else(|poisoned| {
        warn!("active style lock was poisoned; overwriting configuration");
        PoisonError::into_inner(poisoned)
    })
}

/// Installs the [`paper`](StyleOptions::paper) style with grid visibility
/// set to `grid`.
pub fn configure(grid: bool) {
    configure_with(&StyleOptions::paper(), grid);
}

/// Installs the style built from `options` with grid visibility set to `grid`.
pub fn configure_with(options: &StyleOptions, grid: bool) {
    set_active(options.build(grid));
}

/// Replaces the active configuration wholesale.
pub fn set_active(config: DisplayConfiguration) {
    debug!(style_sheet = %config.style_sheet, grid = config.axes_grid, "installing active configuration");
    *write_active() = config;
}

/// Returns a copy of the active configuration.
pub fn active() -> DisplayConfiguration {
    read_active().clone()
}

/// Restores the library defaults.
pub fn reset() {
    set_active(DisplayConfiguration::default());
}

/// Resolves a name from the ten-entry palette against the active cycle.
///
/// # Example
///
/// ```rust
/// plotstyle::rc::configure(true);
/// let orange = plotstyle::rc::resolve_color("orange").unwrap();
/// assert_eq!(orange.to_hex(), "#ff7f0e");
/// ```
pub fn resolve_color(name: &str) -> Result<Color> {
    PALETTE.resolve(name, &read_active().prop_cycle)
}

/// Renders the active configuration as `matplotlibrc` text.
pub fn render_active() -> Result<String> {
    RcWriter::new()?.render(&active())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::palette::ColorCycle;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_configure_sets_grid() {
        configure(false);
        assert!(!active().axes_grid);
        configure(true);
        assert!(active().axes_grid);
        reset();
    }

    #[test]
    #[serial]
    fn test_reset_restores_defaults() {
        configure_with(&StyleOptions::compact(), true);
        assert_eq!(active().font_size, 14.0);
        reset();
        assert_eq!(active(), DisplayConfiguration::default());
    }

    #[test]
    #[serial]
    fn test_resolve_color_follows_active_cycle() {
        configure(true);
        assert_eq!(resolve_color("green").unwrap().to_hex(), "#2ca02c");

        let options = StyleOptions {
            prop_cycle: ColorCycle::new(vec!["#000000".parse().unwrap()]),
            ..StyleOptions::paper()
        };
        configure_with(&options, true);
        assert_eq!(resolve_color("blue").unwrap().to_hex(), "#000000");
        assert!(matches!(
            resolve_color("green"),
            Err(StyleError::CycleExhausted { .. })
        ));
        reset();
    }

    #[test]
    #[serial]
    fn test_resolve_unknown_name() {
        reset();
        assert!(matches!(
            resolve_color("teal"),
            Err(StyleError::NotFound { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_render_active() {
        configure(false);
        let rc = render_active().unwrap();
        assert!(rc.contains("axes.grid: False\n"));
        reset();
    }
}
