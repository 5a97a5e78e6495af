use super::*;

/// Tests creating a planet.
///
/// Verifies that the repository inserts the planet and returns it with a
/// generated ID and the submitted fields.
///
/// Expected: Ok with planet created
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            population: 200_000,
        })
        .await?;

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, 200_000);

    Ok(())
}

/// Tests that planet names are not unique.
///
/// Expected: Ok with two planets sharing a name but with distinct IDs
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let param = CreatePlanetParam {
        name: "Naboo".to_string(),
        population: 4_500_000_000,
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
