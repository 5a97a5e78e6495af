use super::*;

/// Tests removing a stored favorite.
///
/// Expected: Ok(1) and the pair no longer exists
#[tokio::test]
async fn removes_stored_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let species = factory::create_species(db).await?;
    factory::create_favorite_species(db, user.id, species.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove(FavoriteKind::Species, user.id, species.id).await?;

    assert_eq!(removed, 1);
    assert!(!repo.exists(FavoriteKind::Species, user.id, species.id).await?);

    Ok(())
}

/// Tests removing a pair that was never added.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_absent_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, character) = factory::helpers::create_character_with_dependencies(db).await?;

    let removed = FavoriteRepository::new(db)
        .remove(FavoriteKind::Character, user.id, character.id)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
