use super::*;

/// Tests renaming a character without touching other fields.
///
/// Expected: Ok(Some(Character)) with only the name changed
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;
    let luke = factory::character::CharacterFactory::new(db)
        .homeworld(Some(planet.id))
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(
            luke.id,
            UpdateCharacterParams {
                name: Some("Luke".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Luke");
    assert_eq!(updated.homeworld, Some(planet.id));
    assert_eq!(updated.mass, luke.mass);
    assert_eq!(updated.birth_year, luke.birth_year);

    Ok(())
}

/// Tests clearing a character's homeworld with an explicit null.
///
/// Expected: Ok(Some(Character)) with homeworld None
#[tokio::test]
async fn clears_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;
    let luke = factory::character::CharacterFactory::new(db)
        .homeworld(Some(planet.id))
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(
            luke.id,
            UpdateCharacterParams {
                homeworld: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.homeworld, None);

    Ok(())
}

/// Tests patching a character that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo
        .update(
            3,
            UpdateCharacterParams {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
