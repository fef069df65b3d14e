use super::*;

/// Tests listing cities.
///
/// Expected: Ok with cities ordered by name and no children loaded
#[tokio::test]
async fn lists_cities_by_name() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_city(db, "Paris", &[1]).await?;
    seed_city(db, "Antwerp", &[]).await?;

    let store = SqlCityInfoStore::begin(db).await?;
    let cities = store.get_cities().await?;

    let names: Vec<_> = cities.iter().map(|city| city.name.as_str()).collect();
    assert_eq!(names, ["Antwerp", "Paris"]);
    assert!(cities[1].points_of_interest.is_empty());

    Ok(())
}

/// Tests getting a city with and without its points of interest.
///
/// Expected: children ordered by id only when requested
#[tokio::test]
async fn gets_city_with_optional_children() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "New York City", &[12, 3]).await?;

    let store = SqlCityInfoStore::begin(db).await?;

    let with_children = store.get_city(city.id, true).await?.unwrap();
    let ids: Vec<_> = with_children
        .points_of_interest
        .iter()
        .map(|poi| poi.id)
        .collect();
    assert_eq!(ids, [3, 12]);

    let without_children = store.get_city(city.id, false).await?.unwrap();
    assert_eq!(without_children.name, "New York City");
    assert!(without_children.points_of_interest.is_empty());

    Ok(())
}

/// Tests lookups of missing records.
///
/// Expected: None/false instead of errors
#[tokio::test]
async fn missing_records_are_absent() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_city_info_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = seed_city(db, "Antwerp", &[4]).await?;

    let store = SqlCityInfoStore::begin(db).await?;

    assert!(store.city_exists(city.id).await?);
    assert!(!store.city_exists(999).await?);
    assert!(store.get_city(999, true).await?.is_none());
    assert!(store.get_point_of_interest(city.id, 4).await?.is_some());
    assert!(store.get_point_of_interest(city.id, 5).await?.is_none());
    assert!(store.get_point_of_interest(999, 4).await?.is_none());
    assert!(store.get_points_of_interest(999).await?.is_empty());

    Ok(())
}
