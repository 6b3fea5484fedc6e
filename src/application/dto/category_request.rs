// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::{CategoryChanges, NewCategory};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 新建分类请求
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "slug is required"))]
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            icon: dto.icon,
            order: dto.order,
        }
    }
}

/// 分类部分更新请求
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "slug cannot be empty"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            icon: dto.icon,
            order: dto.order,
        }
    }
}

/// 删除分类的响应
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryResponseDto {
    pub message: String,
    /// 随分类一起删除的网站数量
    pub deleted_websites: u64,
}
