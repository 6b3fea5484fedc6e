// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::category::{Category, CategoryChanges, NewCategory};
use crate::domain::models::ordering::MoveDirection;
use async_trait::async_trait;
use uuid::Uuid;

/// 分类仓库特质
///
/// 定义分类数据访问接口
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 创建分类，`slug` 重复时返回 `DuplicateKey`
    async fn create(&self, category: NewCategory) -> Result<Category, RepositoryError>;
    /// 根据ID查找分类
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
    /// 根据slug查找分类
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;
    /// 根据排序值查找分类，存在重复值时返回排序最靠前的一条
    async fn find_by_order(&self, order: i32) -> Result<Option<Category>, RepositoryError>;
    /// 按展示顺序列出全部分类
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;
    /// 部分更新分类
    async fn update(&self, id: Uuid, changes: CategoryChanges)
        -> Result<Category, RepositoryError>;
    /// 删除分类并级联删除其下网站，返回被删除的网站数量
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
    /// 与相邻分类交换顺序，返回移动后的完整列表
    async fn move_by(
        &self,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<Category>, RepositoryError>;
}
