//! Tabular (CSV) input and output.
//!
//! This module coerces raw cells into typed employee rows and serializes
//! derived records back to the persisted layout.

mod coercion;
mod reader;
mod writer;

pub use coercion::{coerce_decimal, parse_decimal};
pub use reader::{
    BASE_COLUMNS, PERFORMANCE_LEVEL_COLUMN, PROMOTION_ELIGIBLE_COLUMN, read_rows,
    read_rows_from_path,
};
pub use writer::{write_dataset_file, write_records};
