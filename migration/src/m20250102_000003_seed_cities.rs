use sea_orm_migration::prelude::*;

use super::{
    m20250102_000001_create_city_table::City,
    m20250102_000002_create_point_of_interest_table::PointOfInterest,
};

/// (id, name, description)
pub const CITIES: [(i32, &str, &str); 3] = [
    (1, "New York City", "The one with that big park."),
    (
        2,
        "Antwerp",
        "The one with the cathedral that was never really finished.",
    ),
    (3, "Paris", "The one with that big tower."),
];

/// (id, city_id, name, description)
pub const POINTS_OF_INTEREST: [(i32, i32, &str, &str); 6] = [
    (
        1,
        1,
        "Central Park",
        "The most visited urban park in the United States.",
    ),
    (
        2,
        1,
        "Empire State Building",
        "A 102-story skyscraper located in Midtown Manhattan.",
    ),
    (
        3,
        2,
        "Cathedral of Our Lady",
        "A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.",
    ),
    (
        4,
        2,
        "Antwerp Central Station",
        "The finest example of railway architecture in Belgium.",
    ),
    (
        5,
        3,
        "Eiffel Tower",
        "A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.",
    ),
    (6, 3, "The Louvre", "The world's largest museum."),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut cities = Query::insert();
        cities
            .into_table(City::Table)
            .columns([City::Id, City::Name, City::Description]);
        for (id, name, description) in CITIES {
            cities.values_panic([id.into(), name.into(), description.into()]);
        }
        manager.exec_stmt(cities).await?;

        let mut points = Query::insert();
        points.into_table(PointOfInterest::Table).columns([
            PointOfInterest::Id,
            PointOfInterest::CityId,
            PointOfInterest::Name,
            PointOfInterest::Description,
        ]);
        for (id, city_id, name, description) in POINTS_OF_INTEREST {
            points.values_panic([id.into(), city_id.into(), name.into(), description.into()]);
        }
        manager.exec_stmt(points).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(PointOfInterest::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(City::Table).to_owned())
            .await
    }
}
