//! Display colors.

mod rgb;

pub use rgb::Color;
