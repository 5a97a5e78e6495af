use super::*;

/// Tests finding an existing species.
///
/// Expected: Ok(Some) with the stored species
#[tokio::test]
async fn finds_existing_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_species(db).await?;

    let found = SpeciesRepository::new(db).find_by_id(created.id).await?;

    assert_eq!(found.map(|s| s.name), Some(created.name));

    Ok(())
}

/// Tests finding a species that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = SpeciesRepository::new(db).find_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
