use sea_orm::DbErr;

use crate::model::Region;

/// One registration of `connected_realm_slug` as an alias of `realm_slug`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedRealm {
    pub region: Region,
    pub realm_slug: String,
    pub connected_realm_slug: String,
    /// Registration order; lower comes first.
    pub position: i32,
}

impl ConnectedRealm {
    pub fn from_entity(entity: entity::connected_realm::Model) -> Result<Self, DbErr> {
        Ok(Self {
            region: entity.region.parse::<Region>().map_err(DbErr::Custom)?,
            realm_slug: entity.realm_slug.trim().to_lowercase(),
            connected_realm_slug: entity.connected_realm_slug.trim().to_lowercase(),
            position: entity.position,
        })
    }
}
