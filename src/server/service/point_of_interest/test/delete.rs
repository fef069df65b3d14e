use super::*;

/// Tests deleting a point of interest.
///
/// Expected: Ok(true), gone afterwards, exactly one notification naming it
#[tokio::test]
async fn deletes_and_notifies_once() -> Result<(), AppError> {
    let Setup {
        service, mut mail, ..
    } = setup();

    assert!(service.delete(1, 2).await?);
    assert!(service.get(1, 2).await?.is_none());

    let sent = mail.recv().await.unwrap();
    assert_eq!(sent.subject, "Point of interest deleted.");
    assert_eq!(
        sent.message,
        "Point of interest Empire State Building with id 2 was deleted."
    );

    assert!(!service.delete(1, 2).await?);
    tokio::task::yield_now().await;
    assert!(mail.try_recv().is_err());

    Ok(())
}

/// Tests deleting under the wrong city.
///
/// Expected: Ok(false), nothing removed, no notification
#[tokio::test]
async fn wrong_city_returns_false() -> Result<(), AppError> {
    let Setup {
        store,
        service,
        mut mail,
    } = setup();

    assert!(!service.delete(2, 1).await?);
    assert!(store.get_point_of_interest(1, 1).await?.is_some());
    tokio::task::yield_now().await;
    assert!(mail.try_recv().is_err());

    Ok(())
}
