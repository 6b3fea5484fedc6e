// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义目录（分类和网站）的持久化契约，具体实现由基础设施层提供。
/// 唯一性、引用完整性和排序规则在这一层以错误类型的形式对外暴露。
pub mod category_repository;
pub mod website_repository;

use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一字段冲突，已有记录保持不变
    #[error("Duplicate value for unique field `{field}`")]
    DuplicateKey { field: &'static str },
    /// 网站引用了不存在的分类
    #[error("Category {category_id} does not exist")]
    ReferentialIntegrityViolation { category_id: Uuid },
    /// 字段校验失败
    #[error("Validation failed: {0}")]
    Validation(String),
}
