use super::*;

/// Tests writing back the updatable fields.
///
/// Expected: new values visible inside the transaction, id and city unchanged
#[tokio::test]
async fn writes_back_fields() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "New York City", &[1]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let mut poi = store.get_point_of_interest(city.id, 1).await?.unwrap();
    poi.name = "Updated - Central Park".to_string();
    poi.description = None;

    store.update_point_of_interest(&poi).await?;

    let stored = store.get_point_of_interest(city.id, 1).await?.unwrap();
    assert_eq!(stored, poi);

    Ok(())
}

/// Tests writing back a point of interest that does not exist.
///
/// Expected: Err(PointOfInterestNotFound)
#[tokio::test]
async fn fails_for_missing_point_of_interest() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "New York City", &[1]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let mut poi = store.get_point_of_interest(city.id, 1).await?.unwrap();
    poi.id = 77;

    let result = store.update_point_of_interest(&poi).await;

    assert!(matches!(
        result,
        Err(StoreError::PointOfInterestNotFound(77))
    ));

    Ok(())
}
