use super::*;

/// Tests finding a listing when it exists.
///
/// Expected: Ok(Some(record)) with all columns mapped
#[tokio::test]
async fn finds_existing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::server::ServerFactory::new(db)
        .id("123456789012345678")
        .name("Test Server")
        .description(Some("Chill community".to_string()))
        .invite_url(Some("https://discord.gg/test".to_string()))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let server = repo.find_by_id("123456789012345678").await?.unwrap();

    assert_eq!(server.id, "123456789012345678");
    assert_eq!(server.name, "Test Server");
    assert_eq!(server.description, Some("Chill community".to_string()));
    assert_eq!(server.invite_url, Some("https://discord.gg/test".to_string()));
    assert!((server.updated_at - created.updated_at).num_milliseconds().abs() < 1000);

    Ok(())
}

/// Tests finding a listing that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unregistered_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let server = repo.find_by_id("999999999999999999").await?;

    assert!(server.is_none());

    Ok(())
}

/// Tests finding the correct listing among several.
///
/// Expected: Ok(Some(record)) for the requested id only
#[tokio::test]
async fn finds_correct_server_among_multiple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, name) in [("111", "One"), ("222", "Two"), ("333", "Three")] {
        factory::server::ServerFactory::new(db)
            .id(id)
            .name(name)
            .build()
            .await?;
    }

    let repo = ServerRepository::new(db);
    let server = repo.find_by_id("222").await?.unwrap();

    assert_eq!(server.name, "Two");

    Ok(())
}
