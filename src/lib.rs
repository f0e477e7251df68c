//! Data-access layer mapping an integer id to an ordered list of namespaced
//! key/value properties, backed by ScyllaDB/Apache Cassandra.
//!
//! Layout:
//! - `property.rs`: domain value object and its tuple codec
//! - `schema.rs`: table/column names and CQL statement text
//! - `table.rs`: schema provisioning and save/get operations
//! - `error.rs`: crate error type over the driver's errors

pub mod error;
pub mod property;
pub mod schema;
pub mod table;

pub use error::StoreError;
pub use property::Property;
pub use table::PropertyTable;
