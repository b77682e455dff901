//! Data module - CSV loading, column typing and cleaning

mod cleaner;
mod columns;
mod loader;

pub use cleaner::clean;
pub use columns::{columns_of_kind, numeric_values, text_rows, text_values, ColumnKind};
pub use loader::{DataLoader, Upload};
