use super::*;

/// Tests listing planets ordered by ID.
///
/// Expected: Ok(Vec) with every planet in ascending ID order
#[tokio::test]
async fn returns_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::planet::create_planet(db).await?;
    let hoth = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, tatooine.id);
    assert_eq!(planets[1].id, hoth.id);
    assert_eq!(planets[1].name, "Hoth");

    Ok(())
}

/// Tests finding a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}
