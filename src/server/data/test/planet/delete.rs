use super::*;

/// Tests deleting an existing planet.
///
/// Expected: Ok(true) and the planet no longer found
#[tokio::test]
async fn deletes_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(planet.id).await?);
    assert!(repo.find_by_id(planet.id).await?.is_none());

    Ok(())
}

/// Tests deleting a planet that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}

/// Tests that deleting a homeworld clears the reference on its characters.
///
/// Expected: Ok(true) and the character's homeworld set to NULL
#[tokio::test]
async fn clears_character_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;
    let luke = factory::character::CharacterFactory::new(db)
        .homeworld(Some(planet.id))
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(planet.id).await?);

    let stored = entity::prelude::Character::find_by_id(luke.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.homeworld, None);

    Ok(())
}

/// Tests that favorites pointing at a deleted planet are left in place.
///
/// Expected: Ok(true) and the favorite row still stored
#[tokio::test]
async fn leaves_favorites_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let planet = factory::planet::create_planet(db).await?;
    factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(planet.id).await?);

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);

    Ok(())
}
