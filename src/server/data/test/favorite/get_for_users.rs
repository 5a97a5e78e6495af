use super::*;

/// Tests batch loading favorites for several users.
///
/// Verifies that each user's favorites are grouped under their own ID and
/// ordered by target ID, and that users without favorites are absent.
///
/// Expected: Ok with favorites grouped per user
#[tokio::test]
async fn groups_favorites_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let han = factory::create_user(db).await?;
    let tatooine = factory::create_planet(db).await?;
    let alderaan = factory::create_planet(db).await?;

    factory::create_favorite_planet(db, luke.id, alderaan.id).await?;
    factory::create_favorite_planet(db, luke.id, tatooine.id).await?;
    factory::create_favorite_planet(db, leia.id, alderaan.id).await?;

    let favorites = FavoriteRepository::new(db)
        .get_for_users(&[luke.id, leia.id, han.id])
        .await?;

    let luke_planets: Vec<i32> = favorites[&luke.id].planets.iter().map(|p| p.id).collect();
    assert_eq!(luke_planets, vec![tatooine.id, alderaan.id]);
    assert_eq!(favorites[&leia.id].planets.len(), 1);
    assert!(!favorites.contains_key(&han.id));

    Ok(())
}

/// Tests batch loading with no users.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let favorites = FavoriteRepository::new(db).get_for_users(&[]).await?;

    assert!(favorites.is_empty());

    Ok(())
}
