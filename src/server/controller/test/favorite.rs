use super::*;
use crate::{
    model::{
        api::ErrorDto,
        user::{FavoritesDto, UserDto},
    },
    server::controller::favorite::{
        add_favorite_character, add_favorite_planet, get_user_favorites,
        remove_favorite_planet, remove_favorite_species,
    },
};

/// Tests adding the same planet twice.
///
/// Expected: 200 with the planet listed, then 400 with `Planet already in favorites`
#[tokio::test]
async fn add_is_not_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let first = add_favorite_planet(State(AppState::new(db.clone())), Path((user.id, planet.id)))
        .await
        .into_response();
    let second = add_favorite_planet(State(AppState::new(db.clone())), Path((user.id, planet.id)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    let updated: UserDto = json_body(first).await;
    assert_eq!(updated.favorite_planets.len(), 1);
    assert_eq!(updated.favorite_planets[0].id, planet.id);

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let err: ErrorDto = json_body(second).await;
    assert_eq!(err.msg, "Planet already in favorites");

    Ok(())
}

/// Tests removing a species twice.
///
/// Expected: 200 with the species gone, then 400 with `Species not in favorites`
#[tokio::test]
async fn remove_is_not_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let species = factory::create_species(db).await?;
    factory::create_favorite_species(db, user.id, species.id).await?;

    let first =
        remove_favorite_species(State(AppState::new(db.clone())), Path((user.id, species.id)))
            .await
            .into_response();
    let second =
        remove_favorite_species(State(AppState::new(db.clone())), Path((user.id, species.id)))
            .await
            .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    let updated: UserDto = json_body(first).await;
    assert!(updated.favorite_species.is_empty());

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let err: ErrorDto = json_body(second).await;
    assert_eq!(err.msg, "Species not in favorites");

    Ok(())
}

/// Tests favorites operations on a missing user or target.
///
/// Expected: 404 with `User or <Kind> not found`
#[tokio::test]
async fn missing_user_or_target_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let missing_character =
        add_favorite_character(State(AppState::new(db.clone())), Path((user.id, 999)))
            .await
            .into_response();
    let missing_user = remove_favorite_planet(State(AppState::new(db.clone())), Path((999, planet.id)))
        .await
        .into_response();

    assert_eq!(missing_character.status(), StatusCode::NOT_FOUND);
    let err: ErrorDto = json_body(missing_character).await;
    assert_eq!(err.msg, "User or Character not found");

    assert_eq!(missing_user.status(), StatusCode::NOT_FOUND);
    let err: ErrorDto = json_body(missing_user).await;
    assert_eq!(err.msg, "User or Planet not found");

    Ok(())
}

/// Tests listing a user's favorites.
///
/// Expected: 200 with the three lists, 404 with `User not found` for an unknown user
#[tokio::test]
async fn lists_user_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, species, character) = factory::helpers::create_character_with_dependencies(db).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;
    factory::create_favorite_species(db, user.id, species.id).await?;

    let found = get_user_favorites(State(AppState::new(db.clone())), Path(user.id))
        .await
        .into_response();
    let missing = get_user_favorites(State(AppState::new(db.clone())), Path(999))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    let favorites: FavoritesDto = json_body(found).await;
    assert_eq!(favorites.characters.len(), 1);
    assert_eq!(favorites.species.len(), 1);
    assert!(favorites.planets.is_empty());

    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let err: ErrorDto = json_body(missing).await;
    assert_eq!(err.msg, "User not found");

    Ok(())
}
