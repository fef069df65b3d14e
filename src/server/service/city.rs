use std::sync::Arc;

use crate::server::{data::CityInfoStore, error::AppError, model::city::City};

pub struct CityService {
    store: Arc<dyn CityInfoStore>,
}

impl CityService {
    pub fn new(store: Arc<dyn CityInfoStore>) -> Self {
        Self { store }
    }

    /// Gets all cities ordered by name, without points of interest
    pub async fn list(&self) -> Result<Vec<City>, AppError> {
        Ok(self.store.get_cities().await?)
    }

    /// Gets a city, optionally with its points of interest
    /// Returns None if the city doesn't exist
    pub async fn get(
        &self,
        city_id: i32,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, AppError> {
        Ok(self
            .store
            .get_city(city_id, include_points_of_interest)
            .await?)
    }
}
