use super::*;

/// Tests that listings come back most recently bumped first.
///
/// Expected: Ok with descending updated_at order
#[tokio::test]
async fn orders_by_most_recent_bump() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (id, hours_ago) in [("111", 5), ("222", 1), ("333", 3)] {
        factory::server::ServerFactory::new(db)
            .id(id)
            .updated_at(now - chrono::Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let repo = ServerRepository::new(db);
    let (servers, total) = repo.get_verified_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let ids: Vec<&str> = servers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["222", "333", "111"]);

    Ok(())
}

/// Tests that unverified listings are hidden.
///
/// Expected: Ok with only verified listings counted and returned
#[tokio::test]
async fn excludes_unverified_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .id("111")
        .verified(true)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .id("222")
        .verified(false)
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let (servers, total) = repo.get_verified_paginated(0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, "111");

    Ok(())
}

/// Tests splitting listings across pages.
///
/// Expected: Ok with page sizes respected and total unchanged
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_server(db).await?;
    }

    let repo = ServerRepository::new(db);
    let (first_page, total) = repo.get_verified_paginated(0, 2).await?;
    let (last_page, _) = repo.get_verified_paginated(2, 2).await?;
    let (beyond, _) = repo.get_verified_paginated(3, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(last_page.len(), 1);
    assert!(beyond.is_empty());

    Ok(())
}
