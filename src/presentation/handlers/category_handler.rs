// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::category_request::{
    CreateCategoryDto, DeleteCategoryResponseDto, UpdateCategoryDto,
};
use crate::application::dto::move_request::MoveRequestDto;
use crate::domain::models::category::Category;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::repositories::RepositoryError;
use crate::presentation::errors::AppError;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 按展示顺序列出分类
pub async fn list_categories<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(repo.list().await?))
}

pub async fn get_category<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, AppError> {
    let category = repo
        .find_by_id(id)
        .await?
        .ok_or(RepositoryError::NotFound)?;
    Ok(Json(category))
}

/// 新建分类，未指定排序时追加到末尾
pub async fn create_category<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    payload.validate()?;
    let category = repo.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<Json<Category>, AppError> {
    payload.validate()?;
    let category = repo.update(id, payload.into()).await?;
    Ok(Json(category))
}

/// 删除分类，其下网站一并删除
pub async fn delete_category<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteCategoryResponseDto>, AppError> {
    let deleted_websites = repo.delete(id).await?;
    Ok(Json(DeleteCategoryResponseDto {
        message: "Category deleted".to_string(),
        deleted_websites,
    }))
}

/// 上移或下移分类，返回重新排序后的列表
pub async fn move_category<C: CategoryRepository>(
    Extension(repo): Extension<Arc<C>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveRequestDto>,
) -> Result<Json<Vec<Category>>, AppError> {
    let direction = payload
        .direction()
        .ok_or_else(|| AppError::bad_request("direction must be `up` or `down`"))?;
    Ok(Json(repo.move_by(id, direction).await?))
}
