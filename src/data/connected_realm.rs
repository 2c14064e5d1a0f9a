use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::ConnectedRealm;

/// Read access to the connected realm reference data.
pub struct ConnectedRealmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectedRealmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all connected realm registrations in registration order.
    ///
    /// Registrations that fail conversion are logged and skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<ConnectedRealm>)`: Valid registrations ordered by position
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_all(&self) -> Result<Vec<ConnectedRealm>, DbErr> {
        let rows = entity::prelude::ConnectedRealm::find()
            .order_by_asc(entity::connected_realm::Column::Position)
            .order_by_asc(entity::connected_realm::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let (id, realm) = (row.id, row.realm_slug.clone());
                ConnectedRealm::from_entity(row)
                    .map_err(|e| {
                        tracing::warn!(
                            "Skipping invalid connected realm {} ({}): {}",
                            id,
                            realm,
                            e
                        );
                    })
                    .ok()
            })
            .collect())
    }
}
