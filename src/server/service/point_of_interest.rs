use std::sync::Arc;

use crate::{
    model::point_of_interest::JsonPatchOperationDto,
    server::{
        data::CityInfoStore,
        error::AppError,
        model::point_of_interest::{NewPointOfInterest, PointOfInterest, PointOfInterestForUpdate},
        patch,
        service::mail::{notify_in_background, MailService},
        validation::Validate,
    },
};

pub const DELETED_SUBJECT: &str = "Point of interest deleted.";

pub struct PointOfInterestService {
    store: Arc<dyn CityInfoStore>,
    mail_service: Arc<dyn MailService>,
}

impl PointOfInterestService {
    pub fn new(store: Arc<dyn CityInfoStore>, mail_service: Arc<dyn MailService>) -> Self {
        Self {
            store,
            mail_service,
        }
    }

    /// Gets all points of interest of a city ordered by id
    /// Returns None if the city doesn't exist
    pub async fn list(&self, city_id: i32) -> Result<Option<Vec<PointOfInterest>>, AppError> {
        if !self.store.city_exists(city_id).await? {
            return Ok(None);
        }

        Ok(Some(self.store.get_points_of_interest(city_id).await?))
    }

    /// Gets a point of interest of a city
    /// Returns None if the city or the point of interest doesn't exist
    pub async fn get(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
    ) -> Result<Option<PointOfInterest>, AppError> {
        if !self.store.city_exists(city_id).await? {
            return Ok(None);
        }

        Ok(self
            .store
            .get_point_of_interest(city_id, point_of_interest_id)
            .await?)
    }

    /// Creates a point of interest under its city
    /// Returns None if the city doesn't exist, in which case no id is consumed
    pub async fn create(
        &self,
        draft: NewPointOfInterest,
    ) -> Result<Option<PointOfInterest>, AppError> {
        draft.validate()?;

        if !self.store.city_exists(draft.city_id).await? {
            return Ok(None);
        }

        let created = self.store.add_point_of_interest(draft).await?;
        self.store.persist().await?;

        tracing::debug!(
            "Created point of interest {} in city {}",
            created.id,
            created.city_id
        );

        Ok(Some(created))
    }

    /// Replaces name and description of a point of interest
    /// Returns false if the city or the point of interest doesn't exist
    pub async fn update(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
        update: PointOfInterestForUpdate,
    ) -> Result<bool, AppError> {
        update.validate()?;

        let Some(mut point_of_interest) = self.get(city_id, point_of_interest_id).await? else {
            return Ok(false);
        };

        update.apply_to(&mut point_of_interest);
        self.store
            .update_point_of_interest(&point_of_interest)
            .await?;
        self.store.persist().await?;

        tracing::debug!("Updated point of interest {}", point_of_interest_id);

        Ok(true)
    }

    /// Applies a JSON Patch document to a point of interest
    /// Returns false if the city or the point of interest doesn't exist
    pub async fn patch(
        &self,
        city_id: i32,
        point_of_interest_id: i32,
        document: Vec<JsonPatchOperationDto>,
    ) -> Result<bool, AppError> {
        let Some(mut point_of_interest) = self.get(city_id, point_of_interest_id).await? else {
            return Ok(false);
        };

        let update = patch::run(point_of_interest.to_update_view(), document)?;

        update.apply_to(&mut point_of_interest);
        self.store
            .update_point_of_interest(&point_of_interest)
            .await?;
        self.store.persist().await?;

        tracing::debug!("Patched point of interest {}", point_of_interest_id);

        Ok(true)
    }

    /// Deletes a point of interest and notifies by mail once the deletion is persisted
    /// Returns false if the city or the point of interest doesn't exist
    pub async fn delete(&self, city_id: i32, point_of_interest_id: i32) -> Result<bool, AppError> {
        let Some(point_of_interest) = self.get(city_id, point_of_interest_id).await? else {
            return Ok(false);
        };

        self.store
            .remove_point_of_interest(&point_of_interest)
            .await?;
        self.store.persist().await?;

        tracing::info!(
            "Deleted point of interest {} from city {}",
            point_of_interest.id,
            city_id
        );

        notify_in_background(
            Arc::clone(&self.mail_service),
            DELETED_SUBJECT.to_string(),
            format!(
                "Point of interest {} with id {} was deleted.",
                point_of_interest.name, point_of_interest.id
            ),
        );

        Ok(true)
    }
}

#[cfg(test)]
mod test;
