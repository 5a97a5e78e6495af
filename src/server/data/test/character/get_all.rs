use super::*;

/// Tests listing characters in ID order.
///
/// Expected: Ok with every character ordered by ascending ID
#[tokio::test]
async fn lists_characters_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, species, first) = factory::helpers::create_character_with_dependencies(db).await?;
    let second = factory::create_character(db, planet.id, species.id).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
