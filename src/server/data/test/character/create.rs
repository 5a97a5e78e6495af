use super::*;

/// Tests creating a character linked to a homeworld and species.
///
/// Expected: Ok with character created and both references stored
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let species = factory::create_species(db).await?;

    let character = CharacterRepository::new(db)
        .create(CreateCharacterParam {
            name: "Luke Skywalker".to_string(),
            hair_color: Some("blond".to_string()),
            eye_color: Some("blue".to_string()),
            homeworld_id: planet.id,
            species_id: species.id,
        })
        .await?;

    assert!(character.id > 0);
    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.hair_color.as_deref(), Some("blond"));
    assert_eq!(character.eye_color.as_deref(), Some("blue"));
    assert_eq!(character.homeworld_id, planet.id);
    assert_eq!(character.species_id, species.id);

    Ok(())
}

/// Tests creating a character without optional colors.
///
/// Expected: Ok with hair and eye color stored as None
#[tokio::test]
async fn creates_character_without_colors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let species = factory::create_species(db).await?;

    let character = CharacterRepository::new(db)
        .create(CreateCharacterParam {
            name: "R2-D2".to_string(),
            hair_color: None,
            eye_color: None,
            homeworld_id: planet.id,
            species_id: species.id,
        })
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .expect("character should exist");
    assert!(stored.hair_color.is_none());
    assert!(stored.eye_color.is_none());

    Ok(())
}

/// Tests that the foreign key rejects an unknown homeworld.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_homeworld() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = factory::create_species(db).await?;

    let result = CharacterRepository::new(db)
        .create(CreateCharacterParam {
            name: "Nobody".to_string(),
            hair_color: None,
            eye_color: None,
            homeworld_id: 999,
            species_id: species.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
