use super::*;

/// Tests inserting a new user.
///
/// Verifies that the repository stores both fields and returns the generated ID.
///
/// Expected: Ok(User) with matching data
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "luke".to_string(),
            email: "luke@rebellion.org".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "luke");
    assert_eq!(user.email, "luke@rebellion.org");

    Ok(())
}

/// Tests rejecting a duplicate username.
///
/// Verifies that the unique index on `username` surfaces as a database error and no
/// second row is written.
///
/// Expected: Err(DbErr) and a single stored user
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("luke")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "luke".to_string(),
            email: "other@rebellion.org".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests rejecting a duplicate email.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("luke@rebellion.org")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "skywalker".to_string(),
            email: "luke@rebellion.org".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
