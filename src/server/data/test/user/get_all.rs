use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests that users are listed in insertion (ID) order.
///
/// Expected: Ok(Vec) ordered by ascending ID
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let third = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
