use super::*;

/// Tests removing a point of interest.
///
/// Expected: Ok, sibling untouched
#[tokio::test]
async fn removes_point_of_interest() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Paris", &[5, 6]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let poi = store.get_point_of_interest(city.id, 5).await?.unwrap();

    store.remove_point_of_interest(&poi).await?;

    assert!(store.get_point_of_interest(city.id, 5).await?.is_none());
    assert!(store.get_point_of_interest(city.id, 6).await?.is_some());

    Ok(())
}

/// Tests removing a point of interest twice.
///
/// Expected: Err(PointOfInterestNotFound) on the second call
#[tokio::test]
async fn second_removal_fails() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Paris", &[5]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let poi = store.get_point_of_interest(city.id, 5).await?.unwrap();
    store.remove_point_of_interest(&poi).await?;

    assert!(matches!(
        store.remove_point_of_interest(&poi).await,
        Err(StoreError::PointOfInterestNotFound(5))
    ));

    Ok(())
}
