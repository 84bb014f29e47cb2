//! Loading and plotting of OpenDSS monitor time series.
//!
//! [`data::load`] reads a simulator export into a [`data::Table`],
//! [`data::TimeSeriesSet::select`] picks the series to plot, and
//! [`options::resolve`] validates plot options against their defaults.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod options;
/// Terminal figure rendering.
#[cfg(feature = "tui")]
pub mod tui;
