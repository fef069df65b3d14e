use sea_orm_migration::{prelude::*, schema::*};

use super::m20250102_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointOfInterest::Table)
                    .if_not_exists()
                    // Ids are assigned by the application as max + 1 across all cities.
                    .col(integer(PointOfInterest::Id).primary_key())
                    .col(integer(PointOfInterest::CityId))
                    .col(string_len(PointOfInterest::Name, 50))
                    .col(string_len_null(PointOfInterest::Description, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_of_interest_city_id")
                            .from(PointOfInterest::Table, PointOfInterest::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_point_of_interest_city_id")
                    .table(PointOfInterest::Table)
                    .col(PointOfInterest::CityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointOfInterest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PointOfInterest {
    Table,
    Id,
    CityId,
    Name,
    Description,
}
