//! Shape transforms over indicator results.
//!
//! - [`wide`]: observations to timestamp × zone grids and back through long rows
//! - [`range`]: inclusive calendar-window filtering
//! - [`aggregate`]: whole-window totals, only over filtered grids
//! - [`ultra`]: the consolidated five-column table

pub mod aggregate;
pub mod error;
pub mod range;
pub mod ultra;
pub mod wide;

pub use aggregate::{mean_of_cells, sum_by_column};
pub use error::{RangeError, Result};
pub use range::{RangeFilter, ScopedGrid, filter_range};
pub use ultra::{set_to_ultra_long, sort_ultra_long, to_ultra_long};
pub use wide::{from_long, to_long, to_wide};
