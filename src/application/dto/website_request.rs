// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{NewWebsite, WebsiteChanges};
use crate::domain::models::website_info::SiteMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 新建网站请求
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub icon: Option<String>,
    #[validate(required(message = "categoryId is required"))]
    pub category_id: Option<Uuid>,
    pub order: Option<i32>,
    #[serde(default)]
    pub metadata: SiteMetadata,
}

impl CreateWebsiteDto {
    /// 转换为领域对象，校验通过后 `category_id` 必然存在
    pub fn into_new_website(self) -> Option<NewWebsite> {
        Some(NewWebsite {
            category_id: self.category_id?,
            name: self.name,
            url: self.url,
            description: self.description,
            icon: self.icon,
            order: self.order,
            metadata: self.metadata,
        })
    }
}

/// 网站部分更新请求
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteDto {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: Option<String>,
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category_id: Option<Uuid>,
    pub order: Option<i32>,
    pub metadata: Option<SiteMetadata>,
}

impl From<UpdateWebsiteDto> for WebsiteChanges {
    fn from(dto: UpdateWebsiteDto) -> Self {
        Self {
            name: dto.name,
            url: dto.url,
            description: dto.description,
            icon: dto.icon,
            category_id: dto.category_id,
            order: dto.order,
            metadata: dto.metadata,
        }
    }
}

/// 网站列表查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteQueryDto {
    pub category_id: Option<Uuid>,
}
