use super::*;

/// Tests the existence check for a persisted tournament.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;

    let repo = TournamentRepository::new(db);
    assert!(repo.exists_by_id(tournament.id).await?);

    Ok(())
}

/// Tests the existence check for an id that was never persisted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    assert!(!repo.exists_by_id(999).await?);

    Ok(())
}
