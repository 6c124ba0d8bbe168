use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter};

/// Repository over the vehicle table
///
/// Vehicles are catalog-only for now, nothing reads them over HTTP, so the
/// only method here is the cascade-aware delete used by administrative
/// cleanup.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes a vehicle along with any favorite entries referencing it
    ///
    /// Returns OK regardless of vehicle existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    ///
    /// # Notes
    /// - Favorite entries are removed in a separate statement before the vehicle
    ///   row, if you need transactional behavior pass a transaction as the connection
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await?;

        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
