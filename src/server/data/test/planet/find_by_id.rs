use super::*;

/// Tests finding an existing planet.
///
/// Expected: Ok(Some) with the stored planet
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_planet(db).await?;

    let found = PlanetRepository::new(db).find_by_id(created.id).await?;

    let planet = found.expect("planet should exist");
    assert_eq!(planet.id, created.id);
    assert_eq!(planet.name, created.name);
    assert_eq!(planet.population, created.population);

    Ok(())
}

/// Tests finding a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlanetRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
