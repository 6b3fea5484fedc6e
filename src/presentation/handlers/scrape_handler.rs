// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::domain::models::website_info::WebsiteInfo;
use crate::domain::services::scrape_service::ScrapeService;
use crate::presentation::errors::AppError;
use axum::{Extension, Json};
use std::sync::Arc;

/// 抓取网站信息
///
/// 只有地址缺失或为空白时返回 400；抓取失败同样以 200 返回由主机名构造的兜底结果
pub async fn scrape_website(
    Extension(service): Extension<Arc<ScrapeService>>,
    Json(request): Json<ScrapeRequestDto>,
) -> Result<Json<WebsiteInfo>, AppError> {
    let Some(url) = request.target() else {
        return Err(AppError::bad_request("url is required"));
    };

    let info = match request.deadline() {
        Some(deadline) => service.scrape_with_timeout(url, deadline).await,
        None => service.scrape(url).await,
    };

    Ok(Json(info))
}
