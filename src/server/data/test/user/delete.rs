use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user no longer found
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.exists(user.id).await?);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests that deleting a user leaves the user's favorites in place.
///
/// Favorites are not tied to their user by a foreign key, so the rows survive the delete
/// just as they do for deleted planets and characters.
///
/// Expected: Ok(true) and both favorites still stored
#[tokio::test]
async fn leaves_favorites_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let planet = factory::planet::create_planet(db).await?;
    let owned = factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    factory::favorite::create_planet_favorite(db, other.id, planet.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 2);
    let kept = entity::prelude::Favorite::find_by_id(owned.id).one(db).await?;
    assert_eq!(kept.map(|f| f.user_id), Some(user.id));

    Ok(())
}
