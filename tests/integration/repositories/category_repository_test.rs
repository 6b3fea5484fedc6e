// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_category, seed_website, test_db};
use navhub::domain::models::category::{CategoryChanges, NewCategory};
use navhub::domain::models::ordering::MoveDirection;
use navhub::domain::repositories::category_repository::CategoryRepository;
use navhub::domain::repositories::website_repository::WebsiteRepository;
use navhub::domain::repositories::RepositoryError;
use navhub::infrastructure::repositories::category_repo_impl::CategoryRepoImpl;
use navhub::infrastructure::repositories::website_repo_impl::WebsiteRepoImpl;
use uuid::Uuid;

fn orders_of(categories: &[navhub::domain::models::category::Category]) -> Vec<(String, i32)> {
    categories
        .iter()
        .map(|c| (c.slug.clone(), c.order))
        .collect()
}

#[tokio::test]
async fn test_create_appends_to_end() {
    let repo = CategoryRepoImpl::new(test_db().await);

    let first = seed_category(&repo, "ai").await;
    let second = seed_category(&repo, "dev").await;

    assert_eq!(first.order, 1);
    assert_eq!(second.order, 2);
    assert_eq!(repo.find_by_order(2).await.unwrap().unwrap().id, second.id);
    assert_eq!(repo.find_by_slug("ai").await.unwrap().unwrap().id, first.id);
}

#[tokio::test]
async fn test_duplicate_slug_leaves_original_untouched() {
    let repo = CategoryRepoImpl::new(test_db().await);
    let original = seed_category(&repo, "tools").await;

    let err = repo
        .create(NewCategory {
            name: "Other tools".to_string(),
            slug: "tools".to_string(),
            ..NewCategory::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::DuplicateKey { field: "slug" }));
    let stored = repo.find_by_slug("tools").await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_slug_keep_one() {
    let repo = CategoryRepoImpl::new(test_db().await);
    let new = |name: &str| NewCategory {
        name: name.to_string(),
        slug: "tools".to_string(),
        ..NewCategory::default()
    };

    let (a, b) = tokio::join!(repo.create(new("Tools A")), repo.create(new("Tools B")));

    let (created, rejected) = match (a, b) {
        (Ok(created), Err(err)) | (Err(err), Ok(created)) => (created, err),
        other => panic!("expected exactly one create to succeed: {other:?}"),
    };
    assert!(matches!(rejected, RepositoryError::DuplicateKey { field: "slug" }));
    assert_eq!(repo.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_invalid_slug_is_rejected() {
    let repo = CategoryRepoImpl::new(test_db().await);

    let err = repo
        .create(NewCategory {
            name: "Bad".to_string(),
            slug: "Not A Slug".to_string(),
            ..NewCategory::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[tokio::test]
async fn test_update_rejects_slug_taken_by_other_category() {
    let repo = CategoryRepoImpl::new(test_db().await);
    seed_category(&repo, "a").await;
    let b = seed_category(&repo, "b").await;

    let err = repo
        .update(
            b.id,
            CategoryChanges {
                slug: Some("a".to_string()),
                ..CategoryChanges::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { .. }));

    // Keeping its own slug is not a conflict
    let updated = repo
        .update(
            b.id,
            CategoryChanges {
                name: Some("Bee".to_string()),
                slug: Some("b".to_string()),
                ..CategoryChanges::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Bee");
    assert!(updated.updated_at >= b.updated_at);
}

#[tokio::test]
async fn test_move_swaps_with_neighbor() {
    let repo = CategoryRepoImpl::new(test_db().await);
    seed_category(&repo, "a").await;
    let b = seed_category(&repo, "b").await;
    let c = seed_category(&repo, "c").await;

    let moved = repo.move_by(b.id, MoveDirection::Down).await.unwrap();
    assert_eq!(
        orders_of(&moved),
        vec![("a".into(), 1), ("c".into(), 2), ("b".into(), 3)]
    );

    let moved = repo.move_by(b.id, MoveDirection::Up).await.unwrap();
    assert_eq!(
        orders_of(&moved),
        vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
    );

    // Boundaries are no-ops
    let unchanged = repo.move_by(c.id, MoveDirection::Down).await.unwrap();
    assert_eq!(orders_of(&unchanged), orders_of(&moved));
}

#[tokio::test]
async fn test_move_repairs_duplicate_orders() {
    let repo = CategoryRepoImpl::new(test_db().await);
    for slug in ["x", "y", "z"] {
        repo.create(NewCategory {
            name: slug.to_string(),
            slug: slug.to_string(),
            order: Some(5),
            ..NewCategory::default()
        })
        .await
        .unwrap();
    }

    let listed = repo.list().await.unwrap();
    let last = listed.last().unwrap().clone();
    let moved = repo.move_by(last.id, MoveDirection::Up).await.unwrap();

    let orders: Vec<i32> = moved.iter().map(|c| c.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(moved[1].id, last.id);
}

#[tokio::test]
async fn test_move_unknown_category() {
    let repo = CategoryRepoImpl::new(test_db().await);
    seed_category(&repo, "a").await;

    let err = repo
        .move_by(Uuid::new_v4(), MoveDirection::Up)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn test_delete_cascades_to_websites() {
    let db = test_db().await;
    let categories = CategoryRepoImpl::new(db.clone());
    let websites = WebsiteRepoImpl::new(db.clone());

    let doomed = seed_category(&categories, "doomed").await;
    let kept = seed_category(&categories, "kept").await;
    seed_website(&websites, &doomed, "https://one.example.com").await;
    seed_website(&websites, &doomed, "https://two.example.com").await;
    let survivor = seed_website(&websites, &kept, "https://three.example.com").await;

    let removed = categories.delete(doomed.id).await.unwrap();
    assert_eq!(removed, 2);

    assert!(categories.find_by_id(doomed.id).await.unwrap().is_none());
    let remaining = websites.list(None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    let err = categories.delete(doomed.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}
