//! In-memory User/Product records with validation, numeric reduction and
//! JSON/CSV conversion, plus the HTTP and command-line fronts built on them.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod models;
pub mod processing;
pub mod storage;
pub mod tabular;

pub use error::{DataError, StoreError, ValidationError};
pub use models::{Product, Record, User};
pub use processing::{reduce, Operation};
pub use tabular::{to_objects, to_table, Table};
