// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::domain::models::category::{is_valid_slug, Category, CategoryChanges, NewCategory};
use crate::domain::models::ordering::MoveDirection;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ordering_service::{MovePlan, OrderingService, Ranked};
use crate::infrastructure::database::entities::{category, website};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 分类仓库实现
#[derive(Clone)]
pub struct CategoryRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepoImpl {
    /// 创建新的分类仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::Validation(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_slug(slug: &str) -> Result<(), RepositoryError> {
    if !is_valid_slug(slug) {
        return Err(RepositoryError::Validation(format!(
            "slug `{}` must contain only lowercase letters, digits, '-' or '_'",
            slug
        )));
    }
    Ok(())
}

/// 按展示顺序读取全部分类
async fn sorted_models<C: ConnectionTrait>(conn: &C) -> Result<Vec<category::Model>, DbErr> {
    category::Entity::find()
        .order_by_asc(category::Column::SortOrder)
        .order_by_asc(category::Column::CreatedAt)
        .order_by_asc(category::Column::Id)
        .all(conn)
        .await
}

#[async_trait]
impl CategoryRepository for CategoryRepoImpl {
    async fn create(&self, new: NewCategory) -> Result<Category, RepositoryError> {
        validate_name(&new.name)?;
        validate_slug(&new.slug)?;

        if self.find_by_slug(&new.slug).await?.is_some() {
            return Err(RepositoryError::DuplicateKey { field: "slug" });
        }

        let order = match new.order {
            Some(order) => order,
            None => {
                let last = category::Entity::find()
                    .order_by_desc(category::Column::SortOrder)
                    .one(self.db.as_ref())
                    .await?;
                OrderingService::next_order(last.map(|m| m.sort_order))
            }
        };

        let now = Utc::now();
        let model = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name.trim().to_string()),
            slug: Set(new.slug),
            description: Set(new.description),
            icon: Set(new.icon),
            sort_order: Set(order),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| map_db_err(e, "slug"))?;

        info!(id = %model.id, slug = %model.slug, order = model.sort_order, "Category created");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let model = category::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let model = category::Entity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_order(&self, order: i32) -> Result<Option<Category>, RepositoryError> {
        let model = category::Entity::find()
            .filter(category::Column::SortOrder.eq(order))
            .order_by_asc(category::Column::CreatedAt)
            .order_by_asc(category::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let models = sorted_models(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Category, RepositoryError> {
        let existing = category::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        if let Some(slug) = &changes.slug {
            validate_slug(slug)?;
            if *slug != existing.slug && self.find_by_slug(slug).await?.is_some() {
                return Err(RepositoryError::DuplicateKey { field: "slug" });
            }
        }

        let mut active: category::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(slug) = changes.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(icon) = changes.icon {
            active.icon = Set(Some(icon));
        }
        if let Some(order) = changes.order {
            active.sort_order = Set(order);
        }
        active.updated_at = Set(Utc::now().into());

        let model = active
            .update(self.db.as_ref())
            .await
            .map_err(|e| map_db_err(e, "slug"))?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let txn = self.db.begin().await?;

        if category::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let removed = website::Entity::delete_many()
            .filter(website::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        category::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(id = %id, websites_removed = removed, "Category deleted");
        Ok(removed)
    }

    async fn move_by(
        &self,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<Category>, RepositoryError> {
        let txn = self.db.begin().await?;

        let ranked: Vec<Ranked> = sorted_models(&txn)
            .await?
            .into_iter()
            .map(|m| Ranked {
                id: m.id,
                order: m.sort_order,
                created_at: m.created_at.into(),
            })
            .collect();

        match OrderingService::plan_move(&ranked, id, direction) {
            MovePlan::NotFound => return Err(RepositoryError::NotFound),
            MovePlan::Unchanged => {
                debug!(id = %id, %direction, "Category already at boundary");
            }
            MovePlan::Assign(assignments) => {
                for (target, order) in assignments {
                    category::Entity::update_many()
                        .col_expr(category::Column::SortOrder, Expr::value(order))
                        .filter(category::Column::Id.eq(target))
                        .exec(&txn)
                        .await?;
                }
            }
        }

        let models = sorted_models(&txn).await?;
        txn.commit().await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            icon: model.icon,
            order: model.sort_order,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
