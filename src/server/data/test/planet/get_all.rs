use super::*;

/// Tests listing planets on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}

/// Tests that planets are listed in ID order.
///
/// Expected: Ok with planets ordered by ascending ID
#[tokio::test]
async fn lists_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    let third = factory::create_planet(db).await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
