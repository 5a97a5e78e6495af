use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("leia@alderaan.gov")
        .build()
        .await?;
    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("leia@alderaan.gov")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that email lookup is exact.
///
/// Expected: Ok(None) for an email differing only in case
#[tokio::test]
async fn email_lookup_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("leia@alderaan.gov")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("LEIA@alderaan.gov")
        .await?;

    assert!(found.is_none());

    Ok(())
}
