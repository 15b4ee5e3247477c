pub mod csv;
pub mod rows;

pub use csv::{to_csv, Column, CUSTOMER_COLUMNS, STANDARD_COLUMNS};
pub use rows::{project_order, project_orders, ExportRow};
