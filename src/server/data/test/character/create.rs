use super::*;

/// Tests inserting a character linked to an existing homeworld.
///
/// Expected: Ok(Character) with the homeworld reference stored
#[tokio::test]
async fn creates_character_with_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;

    let repo = CharacterRepository::new(db);
    let character = repo.create(luke(1, Some(planet.id))).await?;

    assert!(character.id > 0);
    assert_eq!(character.homeworld, Some(planet.id));
    assert_eq!(character.name, "Luke Skywalker");

    let listed = repo.get_all().await?;
    assert_eq!(listed, vec![character]);

    Ok(())
}

/// Tests inserting a character without a homeworld.
///
/// Expected: Ok(Character) with homeworld None
#[tokio::test]
async fn creates_character_without_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.create(luke(1, None)).await?;

    assert_eq!(character.homeworld, None);

    Ok(())
}

/// Tests that a homeworld referencing no planet is rejected by the database.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.create(luke(1, Some(999))).await;

    assert!(result.is_err());

    Ok(())
}
