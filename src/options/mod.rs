//! Plot options: vocabulary, resolution against defaults, and decoding.
//!
//! Callers hand [`resolve`] the number of series and any overrides; the
//! returned [`OptionSet`] holds every recognized option. The renderer turns
//! it into a [`PlotStyle`] before drawing.

pub mod key;
pub mod resolve;
pub mod style;
pub mod value;

pub use key::OptionKey;
pub use resolve::{DEFAULT_LINE_WIDTH, OptionSet, RenderDefaults, resolve};
pub use style::{AxisLimits, ColorCode, MarkerDisplay, PlotStyle, PlotType};
pub use value::OptionValue;
