use super::*;

/// Tests creating a player owned by an existing tournament.
///
/// Expected: Ok with an assigned id and the owning tournament referenced
#[tokio::test]
async fn creates_player_in_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(
            tournament.id,
            CreatePlayerParams {
                name: "Tester".to_string(),
            },
        )
        .await?;

    assert!(player.id > 0);
    assert_eq!(player.name, "Tester");
    assert_eq!(player.tournament_id, tournament.id);

    // Verify player exists in database
    let db_player = entity::prelude::Player::find_by_id(player.id).one(db).await?;
    assert!(db_player.is_some());

    Ok(())
}

/// Tests that successive inserts receive distinct assigned ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;

    let repo = PlayerRepository::new(db);
    let first = repo
        .create(
            tournament.id,
            CreatePlayerParams {
                name: "First".to_string(),
            },
        )
        .await?;
    let second = repo
        .create(
            tournament.id,
            CreatePlayerParams {
                name: "Second".to_string(),
            },
        )
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
