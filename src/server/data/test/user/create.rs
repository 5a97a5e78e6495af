use super::*;

/// Tests creating a user.
///
/// Verifies that new users are stored active with the given email and hash.
///
/// Expected: Ok with user created and is_active set to true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            email: "han@falcon.space".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "han@falcon.space");
    assert_eq!(user.password_hash, "$argon2id$placeholder");
    assert!(user.is_active);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        email: "han@falcon.space".to_string(),
        password_hash: "hash".to_string(),
    };
    repo.create(param.clone()).await?;

    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
