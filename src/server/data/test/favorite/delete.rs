use super::*;

/// Tests deleting a favorite by its target.
///
/// Expected: Ok(true) and the favorite no longer found
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let planet = factory::planet::create_planet(db).await?;
    factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    let target = FavoriteTarget {
        user_id: user.id,
        favorite_id: planet.id,
        favorite_type: FavoriteType::Planet,
    };

    let repo = FavoriteRepository::new(db);
    assert!(repo.delete(target).await?);
    assert!(repo.find(target).await?.is_none());

    Ok(())
}

/// Tests deleting a favorite that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete(FavoriteTarget {
            user_id: user.id,
            favorite_id: 1,
            favorite_type: FavoriteType::Character,
        })
        .await?;

    assert!(!deleted);

    Ok(())
}
