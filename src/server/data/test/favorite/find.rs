use super::*;

/// Tests finding an existing favorite by its target.
///
/// Expected: Ok(Some(Favorite))
#[tokio::test]
async fn finds_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;
    let stored = factory::favorite::create_character_favorite(db, user.id, luke.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find(FavoriteTarget {
            user_id: user.id,
            favorite_id: luke.id,
            favorite_type: FavoriteType::Character,
        })
        .await?;

    assert_eq!(found.map(|f| f.id), Some(stored.id));

    Ok(())
}

/// Tests that the target type is part of the lookup.
///
/// Expected: Ok(None) when searching the other type
#[tokio::test]
async fn distinguishes_favorite_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;
    factory::favorite::create_character_favorite(db, user.id, luke.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find(FavoriteTarget {
            user_id: user.id,
            favorite_id: luke.id,
            favorite_type: FavoriteType::Planet,
        })
        .await?;

    assert!(found.is_none());

    Ok(())
}
