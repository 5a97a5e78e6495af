use super::*;
use crate::server::{
    model::character::CreateCharacterParam,
    service::{character::CharacterService, planet::PlanetService, species::SpeciesService},
};

fn character_param(homeworld_id: i32, species_id: i32) -> CreateCharacterParam {
    CreateCharacterParam {
        name: "Obi-Wan Kenobi".to_string(),
        hair_color: Some("auburn".to_string()),
        eye_color: Some("blue-gray".to_string()),
        homeworld_id,
        species_id,
    }
}

/// Tests fetching a missing planet.
///
/// Expected: Err(NotFound) with `Planet not found`
#[tokio::test]
async fn planet_not_found_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = PlanetService::new(db).get_by_id(42).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "Planet not found"));

    Ok(())
}

/// Tests fetching a missing species.
///
/// Expected: Err(NotFound) with `Species not found`
#[tokio::test]
async fn species_not_found_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = SpeciesService::new(db).get_by_id(42).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "Species not found"));

    Ok(())
}

/// Tests fetching a missing character.
///
/// Expected: Err(NotFound) with `Character not found`
#[tokio::test]
async fn character_not_found_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = CharacterService::new(db).get_by_id(42).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "Character not found"));

    Ok(())
}

/// Tests creating a character whose references exist.
///
/// Expected: Ok with character retrievable by ID
#[tokio::test]
async fn creates_character_with_valid_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let species = factory::create_species(db).await?;

    let service = CharacterService::new(db);
    let created = service
        .create(character_param(planet.id, species.id))
        .await
        .unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_eq!(created, fetched);

    Ok(())
}

/// Tests creating a character with an unknown homeworld.
///
/// Expected: Err(BadRequest) with `homeworld does not exist`
#[tokio::test]
async fn rejects_unknown_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = factory::create_species(db).await?;

    let err = CharacterService::new(db)
        .create(character_param(999, species.id))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(msg) if msg == "homeworld does not exist"));

    Ok(())
}

/// Tests creating a character with an unknown species.
///
/// Expected: Err(BadRequest) with `species does not exist`
#[tokio::test]
async fn rejects_unknown_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let err = CharacterService::new(db)
        .create(character_param(planet.id, 999))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(msg) if msg == "species does not exist"));

    Ok(())
}
