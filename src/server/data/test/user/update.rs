use super::*;

/// Tests patching only the email of a user.
///
/// Verifies that the username is left untouched when only the email is provided.
///
/// Expected: Ok(Some(User)) with the new email and original username
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("leia")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                email: Some("leia@alderaan.gov".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "leia");
    assert_eq!(updated.email, "leia@alderaan.gov");

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests that an empty patch returns the stored row unchanged.
///
/// Expected: Ok(Some(User)) equal to the original
#[tokio::test]
async fn empty_patch_returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.update(user.id, UpdateUserParams::default()).await?;

    let unchanged = result.unwrap();
    assert_eq!(unchanged.username, user.username);
    assert_eq!(unchanged.email, user.email);

    Ok(())
}

/// Tests patching a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateUserParams {
                username: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
