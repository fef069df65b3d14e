use thiserror::Error;

/// Failures raised by a `CityInfoStore`.
///
/// Plain absence is never an error: lookups return `Option`/`bool`. These variants cover
/// writes against records that vanished and storage faults.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A write referenced a city that does not exist.
    #[error("City with id {0} not found")]
    CityNotFound(i32),

    /// A write-back or removal referenced a point of interest that does not exist.
    #[error("Point of interest with id {0} not found")]
    PointOfInterestNotFound(i32),

    /// The request transaction was already committed.
    #[error("Store transaction has already been persisted")]
    Closed,

    /// Underlying SeaORM failure, fatal to the request.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
