//! Entity store for cities and points of interest.
//!
//! `CityInfoStore` is the persistence seam used by the service layer. Two variants exist:
//! `InMemoryCityInfoStore`, a process-wide collection seeded with demo data, and
//! `SqlCityInfoStore`, a thin repository over SeaORM that runs each request in its own
//! transaction. Lookups report absence as `None`/`false`; only writes against vanished
//! records and storage faults are errors. Mutations are visible to readers of the same
//! store immediately but only become durable once `persist` returns.

pub mod memory;
pub mod sql;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{memory::InMemoryCityInfoStore, sql::SqlCityInfoStore},
    error::store::StoreError,
    model::{
        city::City,
        point_of_interest::{NewPointOfInterest, PointOfInterest},
    },
};

#[async_trait]
pub trait CityInfoStore: Send + Sync {
    async fn city_exists(&self, city_id: i32) -> Result<bool, StoreError>;

    /// All cities ordered by name, without their points of interest.
    async fn get_cities(&self) -> Result<Vec<City>, StoreError>;

    async fn get_city(
        &self,
        city_id: i32,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError>;

    async fn get_point_of_interest(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
    ) -> Result<Option<PointOfInterest>, StoreError>;

    /// Points of interest of a city ordered by id. Empty for a missing city.
    async fn get_points_of_interest(&self, city_id: i32)
        -> Result<Vec<PointOfInterest>, StoreError>;

    /// Assigns the next id (highest id in the whole store plus one) and appends the
    /// point of interest to its city.
    ///
    /// # Returns
    /// - `Ok(PointOfInterest)` - The stored point of interest with its new id
    /// - `Err(StoreError::CityNotFound)` - The draft's city does not exist, no id consumed
    /// - `Err(StoreError::Database)` - Storage fault
    async fn add_point_of_interest(
        &self,
        draft: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError>;

    /// Writes back name and description of an existing point of interest.
    async fn update_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError>;

    async fn remove_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError>;

    /// Makes pending mutations durable.
    async fn persist(&self) -> Result<(), StoreError>;
}

/// Opens a `CityInfoStore` for each request.
#[derive(Clone)]
pub enum StoreProvider {
    /// Every request shares the same process-wide store.
    InMemory(Arc<InMemoryCityInfoStore>),
    /// Every request gets a fresh transaction on this connection pool.
    Database(DatabaseConnection),
}

impl StoreProvider {
    /// Opens a store for one request.
    ///
    /// Dropping a database-backed store without calling `persist` rolls back its mutations.
    pub async fn open(&self) -> Result<Arc<dyn CityInfoStore>, StoreError> {
        match self {
            Self::InMemory(store) => Ok(Arc::clone(store) as Arc<dyn CityInfoStore>),
            Self::Database(db) => {
                let store = SqlCityInfoStore::begin(db).await?;
                Ok(Arc::new(store) as Arc<dyn CityInfoStore>)
            }
        }
    }
}
