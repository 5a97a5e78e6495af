use super::*;

/// Tests adding one favorite of each kind.
///
/// Expected: Ok with each target listed in the user's favorites
#[tokio::test]
async fn adds_each_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (planet, species, character) =
        factory::helpers::create_character_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(FavoriteKind::Character, user.id, character.id).await?;
    repo.add(FavoriteKind::Planet, user.id, planet.id).await?;
    repo.add(FavoriteKind::Species, user.id, species.id).await?;

    let favorites = repo.get_for_user(user.id).await?;

    assert_eq!(favorites.characters.len(), 1);
    assert_eq!(favorites.characters[0].id, character.id);
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].id, planet.id);
    assert_eq!(favorites.species.len(), 1);
    assert_eq!(favorites.species[0].id, species.id);

    Ok(())
}

/// Tests that the composite key rejects a repeated pair.
///
/// Expected: Err(DbErr) reported as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(FavoriteKind::Planet, user.id, planet.id).await?;

    let err = repo
        .add(FavoriteKind::Planet, user.id, planet.id)
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
