// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::ordering::MoveDirection;
use crate::domain::models::website::{NewWebsite, Website, WebsiteChanges};
use async_trait::async_trait;
use uuid::Uuid;

/// 网站仓库特质
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// 创建网站
    ///
    /// `url` 重复时返回 `DuplicateKey`，分类不存在时返回 `ReferentialIntegrityViolation`
    async fn create(&self, website: NewWebsite) -> Result<Website, RepositoryError>;
    /// 根据ID查找网站
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Website>, RepositoryError>;
    /// 根据规范化的URL查找网站
    async fn find_by_url(&self, url: &str) -> Result<Option<Website>, RepositoryError>;
    /// 列出网站，可按分类过滤；结果按分类顺序、分类内顺序排列
    async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Website>, RepositoryError>;
    /// 部分更新网站
    async fn update(&self, id: Uuid, changes: WebsiteChanges) -> Result<Website, RepositoryError>;
    /// 删除网站
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 在所属分类内与相邻网站交换顺序，返回该分类移动后的网站列表
    async fn move_by(
        &self,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<Website>, RepositoryError>;
}
