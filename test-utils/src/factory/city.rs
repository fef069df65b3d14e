//! City factory for creating test city entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::city::CityFactory;
///
/// let city = CityFactory::new(&db)
///     .name("Antwerp")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::city::Model,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values from the city fixture.
    ///
    /// The id is left to the database.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::city::entity(),
        }
    }

    /// Sets the city name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the city description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
