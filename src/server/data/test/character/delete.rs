use super::*;

/// Tests deleting an existing character.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::character::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    assert!(repo.delete(luke.id).await?);
    assert!(repo.find_by_id(luke.id).await?.is_none());
    assert!(!repo.delete(luke.id).await?);

    Ok(())
}
