//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicI32, Ordering};

/// Counter for generating unique IDs in tests.
static COUNTER: AtomicI32 = AtomicI32::new(1);

/// Gets the next unique counter value for test data.
///
/// Point of interest ids are assigned by the application rather than the database,
/// so factories draw them from this counter to avoid collisions.
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creates a city with a single point of interest.
///
/// # Returns
/// - `Ok((city, point_of_interest))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_city_with_point_of_interest(
    db: &DatabaseConnection,
) -> Result<(entity::city::Model, entity::point_of_interest::Model), DbErr> {
    let city = crate::factory::city::create_city(db).await?;
    let point = crate::factory::point_of_interest::create_point_of_interest(db, city.id).await?;

    Ok((city, point))
}
