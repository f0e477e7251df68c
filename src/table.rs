use crate::error::StoreError;
use crate::property::{Property, PropertyTuple};
use crate::schema;
use scylla::client::session::Session;
use scylla::statement::prepared::PreparedStatement;
use std::sync::Arc;
use tracing::debug;

/// Save/load access to per-id property lists.
///
/// Construction provisions the backing table (create-if-not-exists) and
/// prepares the two statements used afterwards. The session is supplied
/// externally and shared; this type holds no other state and does no
/// locking of its own.
pub struct PropertyTable {
    session: Arc<Session>,
    insert: PreparedStatement,
    select: PreparedStatement,
}

impl PropertyTable {
    /// Ensure the table exists, then prepare the insert/select statements.
    /// Safe to call repeatedly and from multiple instances sharing one
    /// store; existing rows are untouched.
    pub async fn new(session: Arc<Session>) -> Result<Self, StoreError> {
        session.query_unpaged(schema::create_table_cql(), ()).await?;

        let insert = session.prepare(schema::insert_cql()).await?;
        let select = session.prepare(schema::select_cql()).await?;
        debug!(table = schema::TABLE_NAME, "property table ready");

        Ok(Self {
            session,
            insert,
            select,
        })
    }

    /// Upsert the full property list for `id`. Previous contents are
    /// replaced, not merged; an empty slice is a valid write. One store
    /// round-trip, last write wins.
    pub async fn save(&self, id: i32, properties: &[Property]) -> Result<(), StoreError> {
        let tuples: Vec<PropertyTuple> = properties
            .iter()
            .cloned()
            .map(PropertyTuple::from)
            .collect();

        self.session
            .execute_unpaged(&self.insert, (id, tuples))
            .await?;
        debug!(id, count = properties.len(), "saved property list");
        Ok(())
    }

    /// Read back the property list for `id` in saved order. A missing row
    /// and a null list column both yield an empty list.
    pub async fn get(&self, id: i32) -> Result<Vec<Property>, StoreError> {
        let result = self.session.execute_unpaged(&self.select, (id,)).await?;

        // An empty list column is stored as null, same as "never saved".
        let tuples = match result
            .into_rows_result()?
            .maybe_first_row::<(Option<Vec<PropertyTuple>>,)>()?
        {
            Some((Some(tuples),)) => tuples,
            _ => return Ok(Vec::new()),
        };

        Ok(tuples.into_iter().map(Property::from).collect())
    }
}
