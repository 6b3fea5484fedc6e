// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::move_request::MoveRequestDto;
use crate::application::dto::website_request::{
    CreateWebsiteDto, UpdateWebsiteDto, WebsiteQueryDto,
};
use crate::domain::models::website::Website;
use crate::domain::repositories::website_repository::WebsiteRepository;
use crate::domain::repositories::RepositoryError;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 列出网站，可通过 `categoryId` 过滤
pub async fn list_websites<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Query(query): Query<WebsiteQueryDto>,
) -> Result<Json<Vec<Website>>, AppError> {
    Ok(Json(repo.list(query.category_id).await?))
}

pub async fn get_website<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Website>, AppError> {
    let website = repo
        .find_by_id(id)
        .await?
        .ok_or(RepositoryError::NotFound)?;
    Ok(Json(website))
}

pub async fn create_website<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Json(payload): Json<CreateWebsiteDto>,
) -> Result<(StatusCode, Json<Website>), AppError> {
    payload.validate()?;
    let new_website = payload
        .into_new_website()
        .ok_or_else(|| AppError::bad_request("categoryId is required"))?;
    let website = repo.create(new_website).await?;
    Ok((StatusCode::CREATED, Json(website)))
}

pub async fn update_website<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWebsiteDto>,
) -> Result<Json<Website>, AppError> {
    payload.validate()?;
    let website = repo.update(id, payload.into()).await?;
    Ok(Json(website))
}

pub async fn delete_website<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    repo.delete(id).await?;
    Ok(Json(json!({ "message": "Website deleted" })))
}

/// 在所属分类内上移或下移网站
pub async fn move_website<W: WebsiteRepository>(
    Extension(repo): Extension<Arc<W>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveRequestDto>,
) -> Result<Json<Vec<Website>>, AppError> {
    let direction = payload
        .direction()
        .ok_or_else(|| AppError::bad_request("direction must be `up` or `down`"))?;
    Ok(Json(repo.move_by(id, direction).await?))
}
