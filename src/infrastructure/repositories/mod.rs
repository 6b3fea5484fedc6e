// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供分类和网站仓库接口的SeaORM实现
pub mod category_repo_impl;
pub mod website_repo_impl;

use crate::domain::repositories::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// 将数据库层的唯一约束冲突转换为 `DuplicateKey`
///
/// 预检查与写入之间存在竞争窗口，数据库约束是最终防线
pub(crate) fn map_db_err(err: DbErr, unique_field: &'static str) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::DuplicateKey {
            field: unique_field,
        },
        _ => RepositoryError::Database(err),
    }
}
