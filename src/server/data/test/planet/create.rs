use super::*;

/// Tests inserting a planet with every field populated.
///
/// Expected: Ok(Planet) echoing the inserted values
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo.create(tatooine(1)).await?;

    assert!(planet.id > 0);
    assert_eq!(planet.uid, 1);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, 200_000);
    assert_eq!(planet.url, "https://swapi.tech/api/planets/1");

    Ok(())
}

/// Tests storing a population beyond the 32-bit range.
///
/// Expected: Ok(Planet) with the full population value
#[tokio::test]
async fn stores_large_population() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParams {
            name: "Coruscant".to_string(),
            population: 1_000_000_000_000,
            ..tatooine(9)
        })
        .await?;

    let stored = repo.find_by_id(planet.id).await?.unwrap();
    assert_eq!(stored.population, 1_000_000_000_000);

    Ok(())
}

/// Tests rejecting a second planet with the same uid.
///
/// Expected: Err(DbErr) and one stored planet
#[tokio::test]
async fn fails_for_duplicate_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    repo.create(tatooine(1)).await?;
    let result = repo
        .create(CreatePlanetParams {
            name: "Other".to_string(),
            url: "https://swapi.tech/api/planets/other".to_string(),
            ..tatooine(1)
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Planet::find().count(db).await?, 1);

    Ok(())
}
