//! Data layer: loading simulator exports and deriving time-series views.
//!
//! ```text
//!  name[.csv]
//!      │
//!      ▼
//!  ┌────────┐
//!  │ loader │  resolve path → comma parse → (tab parse)
//!  └────────┘
//!      │
//!      ▼
//!  ┌────────┐
//!  │ Table  │  named columns, numeric or text
//!  └────────┘
//!      │
//!      ▼
//!  ┌───────────────┐
//!  │ TimeSeriesSet │  time axis + selected series
//!  └───────────────┘
//! ```

pub mod loader;
pub mod series;
pub mod table;

pub use loader::{Delimiter, load};
pub use series::{Series, TimeSeriesSet};
pub use table::{Column, ColumnData, Table};
