//! CQL statement text for the backing table.
//! Statements are unqualified; the supplied session must already have a
//! keyspace selected.

/// Fixed logical table name; not configurable per call.
pub const TABLE_NAME: &str = "properties";

pub const ID: &str = "id";
pub const PROPERTIES: &str = "properties";

/// DDL for the backing table:
/// - `id` int partition key
/// - `properties` list of (namespace, local_name, value) text tuples
///
/// `IF NOT EXISTS` keeps provisioning idempotent across instances sharing
/// one store.
pub fn create_table_cql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE_NAME} \
         ({ID} int PRIMARY KEY, {PROPERTIES} list<frozen<tuple<text, text, text>>>)"
    )
}

pub fn insert_cql() -> String {
    format!("INSERT INTO {TABLE_NAME} ({ID}, {PROPERTIES}) VALUES (?, ?)")
}

pub fn select_cql() -> String {
    format!("SELECT {PROPERTIES} FROM {TABLE_NAME} WHERE {ID} = ?")
}
