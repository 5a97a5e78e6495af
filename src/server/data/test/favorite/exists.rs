use super::*;

/// Tests that exists only matches the exact pair and kind.
///
/// A planet and a species sharing an ID must not be confused, and another
/// user's favorite must not count.
///
/// Expected: Ok(true) only for the stored pair
#[tokio::test]
async fn matches_only_stored_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let species = factory::create_species(db).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.exists(FavoriteKind::Planet, user.id, planet.id).await?);
    assert!(!repo.exists(FavoriteKind::Planet, other.id, planet.id).await?);
    assert!(!repo.exists(FavoriteKind::Species, user.id, species.id).await?);

    Ok(())
}
