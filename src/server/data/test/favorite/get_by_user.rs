use super::*;

/// Tests listing only the favorites belonging to one user.
///
/// Expected: Ok(Vec) containing only that user's favorites in ID order
#[tokio::test]
async fn returns_only_user_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let planet = factory::planet::create_planet(db).await?;
    let luke = factory::character::create_character(db).await?;

    let first = factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    factory::favorite::create_planet_favorite(db, other.id, planet.id).await?;
    let second = factory::favorite::create_character_favorite(db, user.id, luke.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    let ids: Vec<i32> = favorites.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
