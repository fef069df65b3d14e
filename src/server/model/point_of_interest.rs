//! Point of interest domain models and parameters.
//!
//! Provides the persisted `PointOfInterest`, the `NewPointOfInterest` draft used for
//! creation, and `PointOfInterestForUpdate`, the per-request view that full updates and
//! patch documents are applied to before the permitted fields are copied back.

use crate::model::point_of_interest::{
    PointOfInterestDto, PointOfInterestForCreationDto, PointOfInterestForUpdateDto,
};

/// A point of interest owned by exactly one city.
///
/// The id is unique across every city in the store and never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterest {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::point_of_interest::Model) -> Self {
        Self {
            id: entity.id,
            city_id: entity.city_id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> PointOfInterestDto {
        PointOfInterestDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }

    /// Projects the updatable fields into a fresh view for patching.
    pub fn to_update_view(&self) -> PointOfInterestForUpdate {
        PointOfInterestForUpdate {
            name: Some(self.name.clone()),
            description: self.description.clone(),
        }
    }
}

/// Draft of a point of interest that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPointOfInterest {
    pub city_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl NewPointOfInterest {
    pub fn from_dto(city_id: i32, dto: PointOfInterestForCreationDto) -> Self {
        Self {
            city_id,
            name: dto.name.unwrap_or_default(),
            description: dto.description,
        }
    }
}

/// Updatable view of a point of interest.
///
/// `name` is optional only so that a patch can clear it; a cleared name never passes
/// validation and is therefore never copied back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointOfInterestForUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PointOfInterestForUpdate {
    pub fn from_dto(dto: PointOfInterestForUpdateDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }

    /// Copies the permitted fields onto the persisted point of interest.
    ///
    /// The id and owning city are left untouched. Callers validate the view first.
    pub fn apply_to(self, point_of_interest: &mut PointOfInterest) {
        if let Some(name) = self.name {
            point_of_interest.name = name;
        }
        point_of_interest.description = self.description;
    }
}
