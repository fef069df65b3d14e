//! Point of interest factory for creating test point of interest entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test points of interest with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::point_of_interest::PointOfInterestFactory;
///
/// let point = PointOfInterestFactory::new(&db, city.id)
///     .id(1)
///     .name("Central Park")
///     .build()
///     .await?;
/// ```
pub struct PointOfInterestFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::point_of_interest::Model,
}

impl<'a> PointOfInterestFactory<'a> {
    /// Creates a new PointOfInterestFactory with fixture defaults.
    ///
    /// The id is drawn from the shared counter and the name is made unique with it.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - Id of the owning city
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        let entity = entity::point_of_interest::Model {
            id,
            city_id,
            name: format!("Point of Interest {}", id),
            ..fixture::point_of_interest::entity()
        };

        Self { db, entity }
    }

    /// Sets the point of interest id.
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the point of interest name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the point of interest description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the point of interest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::point_of_interest::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing city)
    pub async fn build(self) -> Result<entity::point_of_interest::Model, DbErr> {
        entity::point_of_interest::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            city_id: ActiveValue::Set(self.entity.city_id),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a point of interest with default values for the given city.
pub async fn create_point_of_interest(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::point_of_interest::Model, DbErr> {
    PointOfInterestFactory::new(db, city_id).build().await
}
