use super::*;

/// Tests removing a point of interest from its city.
///
/// Expected: gone from the city, siblings untouched
#[tokio::test]
async fn removes_from_owning_city() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();
    let poi = store.get_point_of_interest(3, 5).await?.unwrap();

    store.remove_point_of_interest(&poi).await?;
    store.persist().await?;

    assert!(store.get_point_of_interest(3, 5).await?.is_none());
    let remaining: Vec<_> = store
        .get_points_of_interest(3)
        .await?
        .into_iter()
        .map(|poi| poi.id)
        .collect();
    assert_eq!(remaining, [6]);

    Ok(())
}

/// Tests removing the same point of interest twice.
///
/// Expected: second removal is Err(PointOfInterestNotFound)
#[tokio::test]
async fn second_removal_fails() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();
    let poi = store.get_point_of_interest(1, 1).await?.unwrap();

    store.remove_point_of_interest(&poi).await?;

    assert!(matches!(
        store.remove_point_of_interest(&poi).await,
        Err(StoreError::PointOfInterestNotFound(1))
    ));

    Ok(())
}
