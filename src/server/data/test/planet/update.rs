use super::*;

/// Tests patching a subset of planet fields.
///
/// Verifies that only the provided fields change and the rest keep their stored values.
///
/// Expected: Ok(Some(Planet)) with the patched name and population
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let updated = repo
        .update(
            planet.id,
            UpdatePlanetParams {
                name: Some("Tatooine II".to_string()),
                population: Some(5),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Tatooine II");
    assert_eq!(updated.population, 5);
    assert_eq!(updated.climate, planet.climate);
    assert_eq!(updated.uid, planet.uid);
    assert_eq!(updated.url, planet.url);

    Ok(())
}

/// Tests patching a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let result = repo
        .update(
            7,
            UpdatePlanetParams {
                name: Some("Nowhere".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests changing a planet's uid to one already in use.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::planet::PlanetFactory::new(db).uid(1).build().await?;
    let second = factory::planet::PlanetFactory::new(db).uid(2).build().await?;

    let repo = PlanetRepository::new(db);
    let result = repo
        .update(
            second.id,
            UpdatePlanetParams {
                uid: Some(first.uid),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
