use super::*;

/// Tests id assignment across every city.
///
/// Expected: max id in the table plus one, stored under the draft's city
#[tokio::test]
async fn assigns_max_id_plus_one() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = seed_city(db, "New York City", &[1, 2]).await?;
    let second = seed_city(db, "Antwerp", &[40]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let created = store
        .add_point_of_interest(draft(first.id, "Brooklyn Bridge"))
        .await?;

    assert_eq!(created.id, 41);
    assert_eq!(created.city_id, first.id);
    assert_eq!(
        store.get_point_of_interest(first.id, 41).await?,
        Some(created)
    );
    assert_eq!(store.get_points_of_interest(second.id).await?.len(), 1);

    Ok(())
}

/// Tests id assignment on an empty table.
///
/// Expected: id 1
#[tokio::test]
async fn first_id_is_one() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Paris", &[]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let created = store.add_point_of_interest(draft(city.id, "Louvre")).await?;

    assert_eq!(created.id, 1);

    Ok(())
}

/// Tests adding under a city that does not exist.
///
/// Expected: Err(CityNotFound), nothing inserted
#[tokio::test]
async fn fails_for_missing_city() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Paris", &[5]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let result = store.add_point_of_interest(draft(999, "Nowhere")).await;
    assert!(matches!(result, Err(StoreError::CityNotFound(999))));

    let created = store.add_point_of_interest(draft(city.id, "Somewhere")).await?;
    assert_eq!(created.id, 6);

    Ok(())
}
