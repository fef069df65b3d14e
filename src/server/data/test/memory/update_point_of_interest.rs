use super::*;

/// Tests writing back name and description.
///
/// Expected: subsequent read returns the new values
#[tokio::test]
async fn writes_back_fields() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();
    let mut poi = store.get_point_of_interest(1, 1).await?.unwrap();

    poi.name = "Updated - Central Park".to_string();
    poi.description = None;
    store.update_point_of_interest(&poi).await?;

    assert_eq!(store.get_point_of_interest(1, 1).await?, Some(poi));

    Ok(())
}

/// Tests writing back a point of interest that was removed in between.
///
/// Expected: Err(PointOfInterestNotFound)
#[tokio::test]
async fn fails_for_removed_point_of_interest() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();
    let poi = store.get_point_of_interest(1, 2).await?.unwrap();

    store.remove_point_of_interest(&poi).await?;
    let result = store.update_point_of_interest(&poi).await;

    assert!(matches!(result, Err(StoreError::PointOfInterestNotFound(2))));

    Ok(())
}
