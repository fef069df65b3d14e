use super::*;

/// Tests id assignment across the whole store.
///
/// Expected: id 7 after the six seeded points of interest, regardless of city
#[tokio::test]
async fn assigns_next_global_id() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    let created = store.add_point_of_interest(draft(2, "Grote Markt")).await?;

    assert_eq!(created.id, 7);
    assert_eq!(created.city_id, 2);
    assert_eq!(store.get_point_of_interest(2, 7).await?, Some(created));

    Ok(())
}

/// Tests id assignment in an empty store.
///
/// Expected: first id is 1
#[tokio::test]
async fn first_id_in_empty_store_is_one() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::new(vec![crate::server::model::city::City {
        id: 1,
        name: "Novi Sad".to_string(),
        description: None,
        points_of_interest: Vec::new(),
    }]);

    let created = store.add_point_of_interest(draft(1, "Petrovaradin")).await?;

    assert_eq!(created.id, 1);

    Ok(())
}

/// Tests adding to a missing city.
///
/// Expected: Err(CityNotFound) and no id consumed
#[tokio::test]
async fn missing_city_consumes_no_id() -> Result<(), StoreError> {
    let store = InMemoryCityInfoStore::seeded();

    let result = store.add_point_of_interest(draft(999, "Nowhere")).await;
    assert!(matches!(result, Err(StoreError::CityNotFound(999))));

    let created = store.add_point_of_interest(draft(1, "Somewhere")).await?;
    assert_eq!(created.id, 7);

    Ok(())
}
