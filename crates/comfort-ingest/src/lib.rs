//! Loading of simulation output into [`comfort_model::RawDataset`].

pub mod csv;
pub mod error;
pub mod frame;

pub use crate::csv::{read_csv_frame, read_raw_csv};
pub use error::{IngestError, Result};
pub use frame::dataset_from_frame;
