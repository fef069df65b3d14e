pub use sea_orm_migration::prelude::*;

mod m20250102_000001_create_city_table;
mod m20250102_000002_create_point_of_interest_table;
mod m20250102_000003_seed_cities;

/// Demo data inserted by the seed migration, shared with the in-memory store.
pub mod seed {
    pub use super::m20250102_000003_seed_cities::{CITIES, POINTS_OF_INTEREST};
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250102_000001_create_city_table::Migration),
            Box::new(m20250102_000002_create_point_of_interest_table::Migration),
            Box::new(m20250102_000003_seed_cities::Migration),
        ]
    }
}
