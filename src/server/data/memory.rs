//! Process-wide in-memory store.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::server::{
    data::CityInfoStore,
    error::store::StoreError,
    model::{
        city::City,
        point_of_interest::{NewPointOfInterest, PointOfInterest},
    },
};

/// Cities and their points of interest held behind a single lock.
///
/// Each store call takes the lock once, so calls are atomic on their own but a request
/// made of several calls may interleave with others. Last write wins.
pub struct InMemoryCityInfoStore {
    cities: RwLock<Vec<City>>,
}

impl InMemoryCityInfoStore {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities: RwLock::new(cities),
        }
    }

    /// Store holding the three demo cities and their six points of interest.
    pub fn seeded() -> Self {
        let cities = migration::seed::CITIES
            .iter()
            .map(|&(id, name, description)| City {
                id,
                name: name.to_string(),
                description: Some(description.to_string()),
                points_of_interest: migration::seed::POINTS_OF_INTEREST
                    .iter()
                    .filter(|&&(_, city_id, _, _)| city_id == id)
                    .map(|&(id, city_id, name, description)| PointOfInterest {
                        id,
                        city_id,
                        name: name.to_string(),
                        description: Some(description.to_string()),
                    })
                    .collect(),
            })
            .collect();

        Self::new(cities)
    }
}

#[async_trait]
impl CityInfoStore for InMemoryCityInfoStore {
    async fn city_exists(&self, city_id: i32) -> Result<bool, StoreError> {
        Ok(self.cities.read().iter().any(|city| city.id == city_id))
    }

    async fn get_cities(&self) -> Result<Vec<City>, StoreError> {
        let mut cities: Vec<City> = self
            .cities
            .read()
            .iter()
            .map(City::without_points_of_interest)
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(cities)
    }

    async fn get_city(
        &self,
        city_id: i32,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError> {
        let cities = self.cities.read();
        let city = cities.iter().find(|city| city.id == city_id);

        Ok(match (city, include_points_of_interest) {
            (Some(city), true) => {
                let mut city = city.clone();
                city.points_of_interest.sort_by_key(|poi| poi.id);
                Some(city)
            }
            (Some(city), false) => Some(city.without_points_of_interest()),
            (None, _) => None,
        })
    }

    async fn get_point_of_interest(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
    ) -> Result<Option<PointOfInterest>, StoreError> {
        Ok(self
            .cities
            .read()
            .iter()
            .find(|city| city.id == city_id)
            .and_then(|city| {
                city.points_of_interest
                    .iter()
                    .find(|poi| poi.id == point_of_interest_id)
            })
            .cloned())
    }

    async fn get_points_of_interest(
        &self,
        city_id: i32,
    ) -> Result<Vec<PointOfInterest>, StoreError> {
        let mut points_of_interest = self
            .cities
            .read()
            .iter()
            .find(|city| city.id == city_id)
            .map(|city| city.points_of_interest.clone())
            .unwrap_or_default();
        points_of_interest.sort_by_key(|poi| poi.id);

        Ok(points_of_interest)
    }

    async fn add_point_of_interest(
        &self,
        draft: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError> {
        let mut cities = self.cities.write();

        let next_id = cities
            .iter()
            .flat_map(|city| city.points_of_interest.iter())
            .map(|poi| poi.id)
            .max()
            .unwrap_or(0)
            + 1;

        let city = cities
            .iter_mut()
            .find(|city| city.id == draft.city_id)
            .ok_or(StoreError::CityNotFound(draft.city_id))?;

        let point_of_interest = PointOfInterest {
            id: next_id,
            city_id: draft.city_id,
            name: draft.name,
            description: draft.description,
        };
        city.points_of_interest.push(point_of_interest.clone());

        Ok(point_of_interest)
    }

    async fn update_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError> {
        let mut cities = self.cities.write();

        let stored = cities
            .iter_mut()
            .find(|city| city.id == point_of_interest.city_id)
            .and_then(|city| {
                city.points_of_interest
                    .iter_mut()
                    .find(|poi| poi.id == point_of_interest.id)
            })
            .ok_or(StoreError::PointOfInterestNotFound(point_of_interest.id))?;

        stored.name = point_of_interest.name.clone();
        stored.description = point_of_interest.description.clone();

        Ok(())
    }

    async fn remove_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError> {
        let mut cities = self.cities.write();

        let city = cities
            .iter_mut()
            .find(|city| city.id == point_of_interest.city_id)
            .ok_or(StoreError::PointOfInterestNotFound(point_of_interest.id))?;

        let before = city.points_of_interest.len();
        city.points_of_interest
            .retain(|poi| poi.id != point_of_interest.id);

        if city.points_of_interest.len() == before {
            return Err(StoreError::PointOfInterestNotFound(point_of_interest.id));
        }

        Ok(())
    }

    /// Mutations are applied in place, nothing to flush.
    async fn persist(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
