use super::*;

/// Tests the seeded store contents.
///
/// Expected: three cities ordered by name, without children
#[tokio::test]
async fn lists_seeded_cities_by_name() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    let cities = store.get_cities().await?;

    let names: Vec<_> = cities.iter().map(|city| city.name.as_str()).collect();
    assert_eq!(names, ["Antwerp", "New York City", "Paris"]);
    assert!(cities.iter().all(|city| city.points_of_interest.is_empty()));

    Ok(())
}

/// Tests getting a city with its points of interest.
///
/// Expected: Ok(Some) with both New York points of interest
#[tokio::test]
async fn gets_city_with_points_of_interest() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    let city = store.get_city(1, true).await?.unwrap();

    assert_eq!(city.name, "New York City");
    let ids: Vec<_> = city.points_of_interest.iter().map(|poi| poi.id).collect();
    assert_eq!(ids, [1, 2]);

    Ok(())
}

/// Tests getting a city without its points of interest.
///
/// Expected: Ok(Some) with an empty collection
#[tokio::test]
async fn gets_city_without_points_of_interest() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    let city = store.get_city(3, false).await?.unwrap();

    assert_eq!(city.name, "Paris");
    assert!(city.points_of_interest.is_empty());

    Ok(())
}

/// Tests lookups against a city that does not exist.
///
/// Expected: None, false, and an empty list rather than errors
#[tokio::test]
async fn missing_city_is_absent_not_error() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    assert!(store.get_city(999, true).await?.is_none());
    assert!(!store.city_exists(999).await?);
    assert!(store.get_points_of_interest(999).await?.is_empty());
    assert!(store.get_point_of_interest(999, 1).await?.is_none());

    Ok(())
}

/// Tests that a point of interest is only found under its own city.
///
/// Expected: None when looked up under another city
#[tokio::test]
async fn point_of_interest_scoped_to_city() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    assert!(store.get_point_of_interest(1, 1).await?.is_some());
    assert!(store.get_point_of_interest(2, 1).await?.is_none());

    Ok(())
}
