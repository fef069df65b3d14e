use super::*;

/// Tests that persisted mutations are visible to later transactions.
///
/// Expected: the next store sees the added point of interest
#[tokio::test]
async fn persisted_mutations_survive() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Antwerp", &[3]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let created = store.add_point_of_interest(draft(city.id, "MAS")).await?;
    store.persist().await?;
    drop(store);

    let store = SqlCityInfoStore::begin(db).await?;
    assert_eq!(
        store.get_point_of_interest(city.id, created.id).await?,
        Some(created)
    );

    Ok(())
}

/// Tests that dropping a store without persisting rolls back.
///
/// Expected: the next store does not see the removal
#[tokio::test]
async fn unpersisted_mutations_roll_back() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Antwerp", &[3]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let poi = store.get_point_of_interest(city.id, 3).await?.unwrap();
    store.remove_point_of_interest(&poi).await?;
    drop(store);

    let store = SqlCityInfoStore::begin(db).await?;
    assert!(store.get_point_of_interest(city.id, 3).await?.is_some());

    Ok(())
}

/// Tests persisting twice.
///
/// Expected: Err(Closed), and every later call on the store fails the same way
#[tokio::test]
async fn store_is_closed_after_persist() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SqlCityInfoStore::begin(db).await?;
    store.persist().await?;

    assert!(matches!(store.persist().await, Err(StoreError::Closed)));
    assert!(matches!(store.city_exists(1).await, Err(StoreError::Closed)));

    Ok(())
}
