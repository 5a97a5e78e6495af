use super::*;

/// Tests creating a species.
///
/// Expected: Ok with species created and every field stored
#[tokio::test]
async fn creates_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = SpeciesRepository::new(db)
        .create(CreateSpeciesParam {
            name: "Wookiee".to_string(),
            average_height: 210.0,
            average_lifespan: 400.0,
            language: "Shyriiwook".to_string(),
        })
        .await?;

    assert!(species.id > 0);
    assert_eq!(species.name, "Wookiee");
    assert_eq!(species.average_height, 210.0);
    assert_eq!(species.average_lifespan, 400.0);
    assert_eq!(species.language, "Shyriiwook");

    let stored = SpeciesRepository::new(db).get_all().await?;
    assert_eq!(stored, vec![species]);

    Ok(())
}
