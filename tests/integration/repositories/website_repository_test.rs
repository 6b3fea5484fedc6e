// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_category, seed_website, test_db};
use navhub::domain::models::ordering::MoveDirection;
use navhub::domain::models::website::{NewWebsite, WebsiteChanges};
use navhub::domain::models::website_info::SiteMetadata;
use navhub::domain::repositories::website_repository::WebsiteRepository;
use navhub::domain::repositories::RepositoryError;
use navhub::infrastructure::repositories::category_repo_impl::CategoryRepoImpl;
use navhub::infrastructure::repositories::website_repo_impl::WebsiteRepoImpl;
use uuid::Uuid;

async fn repos() -> (CategoryRepoImpl, WebsiteRepoImpl) {
    let db = test_db().await;
    (CategoryRepoImpl::new(db.clone()), WebsiteRepoImpl::new(db))
}

#[tokio::test]
async fn test_create_normalizes_url_and_defaults_icon() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;

    let website = websites
        .create(NewWebsite {
            name: "Rust".to_string(),
            url: "www.rust-lang.org".to_string(),
            description: "A language".to_string(),
            category_id: category.id,
            metadata: SiteMetadata {
                keywords: Some("rust".to_string()),
                language: None,
            },
            ..NewWebsite::default()
        })
        .await
        .unwrap();

    assert_eq!(website.url, "https://www.rust-lang.org/");
    assert_eq!(website.icon, "/icons/placeholder.svg");
    assert_eq!(website.order, 1);
    assert_eq!(website.metadata.keywords.as_deref(), Some("rust"));

    let found = websites.find_by_url("https://www.rust-lang.org").await.unwrap();
    assert_eq!(found.map(|w| w.id), Some(website.id));
}

#[tokio::test]
async fn test_duplicate_url_leaves_original_untouched() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;
    let original = seed_website(&websites, &category, "https://a.com").await;

    let err = websites
        .create(NewWebsite {
            name: "Impostor".to_string(),
            url: "https://a.com/".to_string(),
            description: "Same url, different spelling".to_string(),
            category_id: category.id,
            ..NewWebsite::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::DuplicateKey { field: "url" }));
    let stored = websites.find_by_id(original.id).await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert_eq!(websites.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;
    let website = seed_website(&websites, &category, "https://a.com").await;
    let missing = Uuid::new_v4();

    let err = websites
        .create(NewWebsite {
            name: "Orphan".to_string(),
            url: "https://orphan.com".to_string(),
            description: "No home".to_string(),
            category_id: missing,
            ..NewWebsite::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::ReferentialIntegrityViolation { category_id } if category_id == missing
    ));

    let err = websites
        .update(
            website.id,
            WebsiteChanges {
                category_id: Some(missing),
                ..WebsiteChanges::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityViolation { .. }));
}

#[tokio::test]
async fn test_malformed_url_is_a_validation_error() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;

    let err = websites
        .create(NewWebsite {
            name: "Broken".to_string(),
            url: "https://exa mple.com".to_string(),
            description: "Broken url".to_string(),
            category_id: category.id,
            ..NewWebsite::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[tokio::test]
async fn test_reorder_within_category() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;
    let other = seed_category(&categories, "other").await;

    let a = seed_website(&websites, &category, "https://a.com").await;
    let b = seed_website(&websites, &category, "https://b.com").await;
    let c = seed_website(&websites, &category, "https://c.com").await;
    let elsewhere = seed_website(&websites, &other, "https://d.com").await;
    assert_eq!((a.order, b.order, c.order), (1, 2, 3));
    assert_eq!(elsewhere.order, 1);

    let moved = websites.move_by(b.id, MoveDirection::Down).await.unwrap();
    let ids: Vec<Uuid> = moved.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![a.id, c.id, b.id]);
    let orders: Vec<i32> = moved.iter().map(|w| w.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);

    // The other category is not affected
    let untouched = websites.find_by_id(elsewhere.id).await.unwrap().unwrap();
    assert_eq!(untouched.order, 1);

    let unchanged = websites.move_by(a.id, MoveDirection::Up).await.unwrap();
    assert_eq!(unchanged, moved);
}

#[tokio::test]
async fn test_list_sorted_by_category_then_order() {
    let (categories, websites) = repos().await;
    let first = seed_category(&categories, "first").await;
    let second = seed_category(&categories, "second").await;

    let s1 = seed_website(&websites, &second, "https://s1.com").await;
    let f1 = seed_website(&websites, &first, "https://f1.com").await;
    let f2 = seed_website(&websites, &first, "https://f2.com").await;

    let ids: Vec<Uuid> = websites.list(None).await.unwrap().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![f1.id, f2.id, s1.id]);

    let filtered = websites.list(Some(second.id)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, s1.id);
}

#[tokio::test]
async fn test_moving_to_other_category_appends() {
    let (categories, websites) = repos().await;
    let from = seed_category(&categories, "from").await;
    let to = seed_category(&categories, "to").await;
    seed_website(&websites, &to, "https://existing.com").await;
    let traveller = seed_website(&websites, &from, "https://traveller.com").await;

    let updated = websites
        .update(
            traveller.id,
            WebsiteChanges {
                category_id: Some(to.id),
                ..WebsiteChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.category_id, to.id);
    assert_eq!(updated.order, 2);
}

#[tokio::test]
async fn test_delete_website() {
    let (categories, websites) = repos().await;
    let category = seed_category(&categories, "dev").await;
    let website = seed_website(&websites, &category, "https://a.com").await;

    websites.delete(website.id).await.unwrap();
    assert!(websites.find_by_id(website.id).await.unwrap().is_none());

    let err = websites.delete(website.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}
