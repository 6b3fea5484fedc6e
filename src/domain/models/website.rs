// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::website_info::SiteMetadata;

/// 网站（导航项）实体
///
/// `url` 全局唯一且以规范化形式保存；`category_id` 必须指向已存在的分类；
/// `order` 为分类内的排序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
    pub category_id: Uuid,
    pub order: i32,
    pub metadata: SiteMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新建网站所需字段
#[derive(Debug, Clone, Default)]
pub struct NewWebsite {
    pub name: String,
    pub url: String,
    pub description: String,
    /// 为空时使用占位图标
    pub icon: Option<String>,
    pub category_id: Uuid,
    /// 为空时追加到所属分类末尾
    pub order: Option<i32>,
    pub metadata: SiteMetadata,
}

/// 网站的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct WebsiteChanges {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category_id: Option<Uuid>,
    pub order: Option<i32>,
    pub metadata: Option<SiteMetadata>,
}
