use super::*;

/// Tests touching an existing listing.
///
/// Verifies that updated_at moves forward to approximately the current time.
///
/// Expected: Ok(true) with timestamp updated
#[tokio::test]
async fn updates_timestamp_for_existing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_bump = Utc::now() - chrono::Duration::hours(2);
    factory::server::ServerFactory::new(db)
        .id("123456789")
        .updated_at(old_bump)
        .build()
        .await?;

    let now = Utc::now();
    let repo = ServerRepository::new(db);
    let touched = repo.touch_updated_at("123456789", now).await?;

    assert!(touched);

    let db_server = entity::prelude::Server::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert!(db_server.updated_at > old_bump);
    let drift = (db_server.updated_at - now).num_milliseconds().abs();
    assert!(drift < 1000, "updated_at should match the bump time");

    Ok(())
}

/// Tests touching a listing that does not exist.
///
/// Verifies that no row is created as a side effect.
///
/// Expected: Ok(false) and table still empty
#[tokio::test]
async fn reports_missing_server_without_inserting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let touched = repo.touch_updated_at("999999999", Utc::now()).await?;

    assert!(!touched);
    assert!(entity::prelude::Server::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that touching one listing leaves the others alone.
///
/// Expected: Ok(true) with only the specified listing updated
#[tokio::test]
async fn updates_only_specified_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_bump = Utc::now() - chrono::Duration::hours(2);
    factory::server::ServerFactory::new(db)
        .id("111111111")
        .updated_at(old_bump)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .id("222222222")
        .updated_at(old_bump)
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    repo.touch_updated_at("111111111", Utc::now()).await?;

    let first = entity::prelude::Server::find_by_id("111111111".to_string())
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::Server::find_by_id("222222222".to_string())
        .one(db)
        .await?
        .unwrap();

    assert!(first.updated_at > old_bump);
    let diff = (second.updated_at - old_bump).num_seconds().abs();
    assert!(diff < 2, "Second server timestamp should not have changed");

    Ok(())
}

/// Tests that touching preserves every other column.
///
/// Expected: Ok(true) with only updated_at changed
#[tokio::test]
async fn preserves_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::server::ServerFactory::new(db)
        .id("123456789")
        .name("Keep Me")
        .description(Some("Unchanged".to_string()))
        .invite_url(Some("https://discord.gg/keep".to_string()))
        .verified(false)
        .updated_at(Utc::now() - chrono::Duration::hours(2))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    repo.touch_updated_at("123456789", Utc::now()).await?;

    let db_server = entity::prelude::Server::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(db_server.name, original.name);
    assert_eq!(db_server.description, original.description);
    assert_eq!(db_server.invite_url, original.invite_url);
    assert_eq!(db_server.verified, original.verified);
    assert_eq!(db_server.created_at, original.created_at);
    assert!(db_server.updated_at > original.updated_at);

    Ok(())
}
