use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{sql::SqlCityInfoStore, CityInfoStore},
    error::store::StoreError,
    model::point_of_interest::NewPointOfInterest,
};

mod add_point_of_interest;
mod get_city;
mod persist;
mod remove_point_of_interest;
mod update_point_of_interest;

/// Inserts one city with the given point of interest ids.
///
/// The store transaction holds the only connection of the in-memory pool, so fixtures are
/// created before the store is opened.
async fn seed_city(
    db: &DatabaseConnection,
    name: &str,
    point_of_interest_ids: &[i32],
) -> Result<entity::city::Model, DbErr> {
    let city = factory::city::CityFactory::new(db).name(name).build().await?;

    for &id in point_of_interest_ids {
        factory::point_of_interest::PointOfInterestFactory::new(db, city.id)
            .id(id)
            .build()
            .await?;
    }

    Ok(city)
}

fn draft(city_id: i32, name: &str) -> NewPointOfInterest {
    NewPointOfInterest {
        city_id,
        name: name.to_string(),
        description: Some("Created in a test".to_string()),
    }
}
