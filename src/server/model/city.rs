//! City domain model.

use crate::{
    model::city::{CityDto, CityWithoutPointsOfInterestDto},
    server::model::point_of_interest::PointOfInterest,
};

/// A city and, when requested, its points of interest.
///
/// `points_of_interest` is empty when the city was loaded without children.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Converts an entity model to a domain model without children.
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            points_of_interest: Vec::new(),
        }
    }

    /// Converts a city entity and its point of interest entities to a domain model.
    pub fn from_entity_with_points_of_interest(
        entity: entity::city::Model,
        points_of_interest: Vec<entity::point_of_interest::Model>,
    ) -> Self {
        Self {
            points_of_interest: points_of_interest
                .into_iter()
                .map(PointOfInterest::from_entity)
                .collect(),
            ..Self::from_entity(entity)
        }
    }

    /// Copy of this city without its points of interest.
    pub fn without_points_of_interest(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            points_of_interest: Vec::new(),
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            number_of_points_of_interest: self.points_of_interest.len(),
            points_of_interest: self
                .points_of_interest
                .into_iter()
                .map(PointOfInterest::into_dto)
                .collect(),
        }
    }

    pub fn into_summary_dto(self) -> CityWithoutPointsOfInterestDto {
        CityWithoutPointsOfInterestDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}
