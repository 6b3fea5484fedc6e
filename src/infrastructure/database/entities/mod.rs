// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 使用SeaORM将 `categories` 和 `websites` 两张表映射为实体
pub mod category;
pub mod website;
