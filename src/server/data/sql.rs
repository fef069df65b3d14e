//! SeaORM-backed store running one transaction per request.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tokio::sync::Mutex;

use crate::server::{
    data::CityInfoStore,
    error::store::StoreError,
    model::{
        city::City,
        point_of_interest::{NewPointOfInterest, PointOfInterest},
    },
};

/// Repository over the `city` and `point_of_interest` tables.
///
/// All reads and writes go through the request transaction, so a request sees its own
/// uncommitted mutations. `persist` commits; dropping the store without persisting rolls
/// everything back.
pub struct SqlCityInfoStore {
    txn: Mutex<Option<DatabaseTransaction>>,
}

impl SqlCityInfoStore {
    /// Begins the request transaction.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;

        Ok(Self {
            txn: Mutex::new(Some(txn)),
        })
    }
}

#[async_trait]
impl CityInfoStore for SqlCityInfoStore {
    async fn city_exists(&self, city_id: i32) -> Result<bool, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let count = entity::prelude::City::find_by_id(city_id)
            .count(txn)
            .await?;

        Ok(count > 0)
    }

    async fn get_cities(&self) -> Result<Vec<City>, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let cities = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .all(txn)
            .await?;

        Ok(cities.into_iter().map(City::from_entity).collect())
    }

    async fn get_city(
        &self,
        city_id: i32,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let Some(city) = entity::prelude::City::find_by_id(city_id).one(txn).await? else {
            return Ok(None);
        };

        if !include_points_of_interest {
            return Ok(Some(City::from_entity(city)));
        }

        let points_of_interest = entity::prelude::PointOfInterest::find()
            .filter(entity::point_of_interest::Column::CityId.eq(city_id))
            .order_by_asc(entity::point_of_interest::Column::Id)
            .all(txn)
            .await?;

        Ok(Some(City::from_entity_with_points_of_interest(
            city,
            points_of_interest,
        )))
    }

    async fn get_point_of_interest(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
    ) -> Result<Option<PointOfInterest>, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let point_of_interest = entity::prelude::PointOfInterest::find_by_id(point_of_interest_id)
            .filter(entity::point_of_interest::Column::CityId.eq(city_id))
            .one(txn)
            .await?;

        Ok(point_of_interest.map(PointOfInterest::from_entity))
    }

    async fn get_points_of_interest(
        &self,
        city_id: i32,
    ) -> Result<Vec<PointOfInterest>, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let points_of_interest = entity::prelude::PointOfInterest::find()
            .filter(entity::point_of_interest::Column::CityId.eq(city_id))
            .order_by_asc(entity::point_of_interest::Column::Id)
            .all(txn)
            .await?;

        Ok(points_of_interest
            .into_iter()
            .map(PointOfInterest::from_entity)
            .collect())
    }

    async fn add_point_of_interest(
        &self,
        draft: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let city_count = entity::prelude::City::find_by_id(draft.city_id)
            .count(txn)
            .await?;
        if city_count == 0 {
            return Err(StoreError::CityNotFound(draft.city_id));
        }

        let max_id = entity::prelude::PointOfInterest::find()
            .select_only()
            .column_as(entity::point_of_interest::Column::Id.max(), "max_id")
            .into_tuple::<Option<i32>>()
            .one(txn)
            .await?
            .flatten();

        let point_of_interest = entity::point_of_interest::ActiveModel {
            id: ActiveValue::Set(max_id.unwrap_or(0) + 1),
            city_id: ActiveValue::Set(draft.city_id),
            name: ActiveValue::Set(draft.name),
            description: ActiveValue::Set(draft.description),
        }
        .insert(txn)
        .await?;

        Ok(PointOfInterest::from_entity(point_of_interest))
    }

    async fn update_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let result = entity::point_of_interest::ActiveModel {
            id: ActiveValue::Unchanged(point_of_interest.id),
            city_id: ActiveValue::Unchanged(point_of_interest.city_id),
            name: ActiveValue::Set(point_of_interest.name.clone()),
            description: ActiveValue::Set(point_of_interest.description.clone()),
        }
        .update(txn)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::PointOfInterestNotFound(
                point_of_interest.id,
            )),
            Err(err) => Err(err.into()),
        }
    }

    async fn remove_point_of_interest(
        &self,
        point_of_interest: &PointOfInterest,
    ) -> Result<(), StoreError> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let result = entity::prelude::PointOfInterest::delete_by_id(point_of_interest.id)
            .exec(txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::PointOfInterestNotFound(point_of_interest.id));
        }

        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let txn = self.txn.lock().await.take().ok_or(StoreError::Closed)?;
        txn.commit().await?;

        Ok(())
    }
}
