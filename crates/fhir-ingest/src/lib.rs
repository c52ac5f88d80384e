//! External collaborators around the binder core: CSV loading into
//! column-oriented input and Polars dataframe interop. No binder logic
//! lives here.

pub mod csv_table;
pub mod frame;

pub use csv_table::{load_columns, write_columns};
pub use frame::{any_to_value, columns_from_frame, frame_from_columns};
