//! Palettes of color names and the cycle they index into.
//!
//! - [`Palette`]: ordered, uniquely named entries
//! - [`ColorCycle`]: the ordered colors a plot assigns to successive series
//!
//! A name resolves to the cycle color at the same position as its palette
//! entry, so `"green"` is whatever color is third in the active cycle.

mod cycle;
#[allow(clippy::module_inception)]
mod palette;

pub use cycle::{ColorCycle, TAB10};
pub use palette::{Palette, PaletteEntry, STANDARD_NAMES};
