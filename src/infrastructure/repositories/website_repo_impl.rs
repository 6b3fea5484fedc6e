// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::config::settings::DEFAULT_PLACEHOLDER_ICON;
use crate::domain::models::ordering::MoveDirection;
use crate::domain::models::website::{NewWebsite, Website, WebsiteChanges};
use crate::domain::models::website_info::SiteMetadata;
use crate::domain::repositories::website_repository::WebsiteRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ordering_service::{MovePlan, OrderingService, Ranked};
use crate::infrastructure::database::entities::{category, website};
use crate::utils::url_utils::normalize_url;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 网站仓库实现
#[derive(Clone)]
pub struct WebsiteRepoImpl {
    db: Arc<DatabaseConnection>,
    placeholder_icon: String,
}

impl WebsiteRepoImpl {
    /// 创建新的网站仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            placeholder_icon: DEFAULT_PLACEHOLDER_ICON.to_string(),
        }
    }

    /// 指定未提供图标时使用的占位图
    pub fn with_placeholder_icon(mut self, icon: impl Into<String>) -> Self {
        self.placeholder_icon = icon.into();
        self
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<(), RepositoryError> {
        let exists = category::Entity::find_by_id(category_id)
            .one(self.db.as_ref())
            .await?
            .is_some();
        if !exists {
            return Err(RepositoryError::ReferentialIntegrityViolation { category_id });
        }
        Ok(())
    }

    async fn next_order_in(&self, category_id: Uuid) -> Result<i32, RepositoryError> {
        let last = website::Entity::find()
            .filter(website::Column::CategoryId.eq(category_id))
            .order_by_desc(website::Column::SortOrder)
            .one(self.db.as_ref())
            .await?;
        Ok(OrderingService::next_order(last.map(|m| m.sort_order)))
    }

    pub(super) fn map_write_err(err: DbErr, category_id: Uuid) -> RepositoryError {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                RepositoryError::ReferentialIntegrityViolation { category_id }
            }
            _ => map_db_err(err, "url"),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

fn canonical_url(raw: &str) -> Result<String, RepositoryError> {
    normalize_url(raw)
        .map(|url| url.to_string())
        .map_err(|e| RepositoryError::Validation(e.to_string()))
}

fn metadata_json(metadata: &SiteMetadata) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(metadata).map_err(|e| RepositoryError::Validation(e.to_string()))
}

/// 读取某个分类下按展示顺序排列的网站
async fn sorted_in_category<C: ConnectionTrait>(
    conn: &C,
    category_id: Uuid,
) -> Result<Vec<website::Model>, DbErr> {
    website::Entity::find()
        .filter(website::Column::CategoryId.eq(category_id))
        .order_by_asc(website::Column::SortOrder)
        .order_by_asc(website::Column::CreatedAt)
        .order_by_asc(website::Column::Id)
        .all(conn)
        .await
}

#[async_trait]
impl WebsiteRepository for WebsiteRepoImpl {
    async fn create(&self, new: NewWebsite) -> Result<Website, RepositoryError> {
        require_text("name", &new.name)?;
        require_text("description", &new.description)?;
        let url = canonical_url(&new.url)?;

        self.ensure_category(new.category_id).await?;

        if self.find_by_url(&url).await?.is_some() {
            return Err(RepositoryError::DuplicateKey { field: "url" });
        }

        let order = match new.order {
            Some(order) => order,
            None => self.next_order_in(new.category_id).await?,
        };

        let icon = new
            .icon
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or_else(|| self.placeholder_icon.clone());

        let now = Utc::now();
        let model = website::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name.trim().to_string()),
            url: Set(url),
            description: Set(new.description),
            icon: Set(icon),
            category_id: Set(new.category_id),
            sort_order: Set(order),
            metadata: Set(metadata_json(&new.metadata)?),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| Self::map_write_err(e, new.category_id))?;

        info!(id = %model.id, url = %model.url, category_id = %model.category_id, "Website created");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Website>, RepositoryError> {
        let model = website::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Website>, RepositoryError> {
        let url = match normalize_url(url) {
            Ok(url) => url.to_string(),
            Err(_) => url.to_string(),
        };
        let model = website::Entity::find()
            .filter(website::Column::Url.eq(url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Website>, RepositoryError> {
        if let Some(category_id) = category_id {
            let models = sorted_in_category(self.db.as_ref(), category_id).await?;
            return Ok(models.into_iter().map(Into::into).collect());
        }

        let categories = category::Entity::find()
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::CreatedAt)
            .order_by_asc(category::Column::Id)
            .all(self.db.as_ref())
            .await?;
        let position: HashMap<Uuid, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        let mut models = website::Entity::find().all(self.db.as_ref()).await?;
        models.sort_by(|a, b| {
            let pa = position.get(&a.category_id).copied().unwrap_or(usize::MAX);
            let pb = position.get(&b.category_id).copied().unwrap_or(usize::MAX);
            pa.cmp(&pb)
                .then(a.sort_order.cmp(&b.sort_order))
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, changes: WebsiteChanges) -> Result<Website, RepositoryError> {
        let existing = website::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &changes.name {
            require_text("name", name)?;
        }
        if let Some(description) = &changes.description {
            require_text("description", description)?;
        }

        let url = match &changes.url {
            Some(raw) => {
                let url = canonical_url(raw)?;
                if url != existing.url && self.find_by_url(&url).await?.is_some() {
                    return Err(RepositoryError::DuplicateKey { field: "url" });
                }
                Some(url)
            }
            None => None,
        };

        let category_id = existing.category_id;
        let moved_to = changes.category_id.filter(|target| *target != category_id);
        if let Some(target) = moved_to {
            self.ensure_category(target).await?;
        }

        // A website moved to another category goes to its end unless an order is given
        let order = match (changes.order, moved_to) {
            (Some(order), _) => Some(order),
            (None, Some(target)) => Some(self.next_order_in(target).await?),
            (None, None) => None,
        };

        let mut active: website::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(url) = url {
            active.url = Set(url);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(icon) = changes.icon {
            let icon = if icon.trim().is_empty() {
                self.placeholder_icon.clone()
            } else {
                icon
            };
            active.icon = Set(icon);
        }
        if let Some(target) = moved_to {
            active.category_id = Set(target);
        }
        if let Some(order) = order {
            active.sort_order = Set(order);
        }
        if let Some(metadata) = &changes.metadata {
            active.metadata = Set(metadata_json(metadata)?);
        }
        active.updated_at = Set(Utc::now().into());

        let model = active
            .update(self.db.as_ref())
            .await
            .map_err(|e| Self::map_write_err(e, moved_to.unwrap_or(category_id)))?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = website::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!(id = %id, "Website deleted");
        Ok(())
    }

    async fn move_by(
        &self,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<Website>, RepositoryError> {
        let txn = self.db.begin().await?;

        let current = website::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let ranked: Vec<Ranked> = sorted_in_category(&txn, current.category_id)
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
                debug!(id = %id, %direction, "Website already at boundary");
            }
            MovePlan::Assign(assignments) => {
                for (target, order) in assignments {
                    website::Entity::update_many()
                        .col_expr(website::Column::SortOrder, Expr::value(order))
                        .filter(website::Column::Id.eq(target))
                        .exec(&txn)
                        .await?;
                }
            }
        }

        let models = sorted_in_category(&txn, current.category_id).await?;
        txn.commit().await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl From<website::Model> for Website {
    fn from(model: website::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            description: model.description,
            icon: model.icon,
            category_id: model.category_id,
            order: model.sort_order,
            metadata: serde_json::from_value(model.metadata).unwrap_or_default(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
