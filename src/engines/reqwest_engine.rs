// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{FetchError, FetchRequest, FetchedPage, PageFetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Instant;
use tracing::debug;

/// 基于 reqwest 的页面抓取器
///
/// 客户端在启动时创建一次并在所有请求间复用
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 按抓取配置构建客户端
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置，提供 User-Agent 和默认超时
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 抓取器
    /// * `Err(FetchError)` - 客户端构建失败（例如 TLS 后端初始化失败）
    pub fn new(settings: &ScraperSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .timeout(settings.timeout())
            .connect_timeout(settings.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchedPage)` - 2xx 响应及其内容
    /// * `Err(FetchError)` - 非 2xx 状态或网络错误
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchedPage, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(&request.url)
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::failed(
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("unexpected status"),
            ));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        let body = response.text().await?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            url = %request.url,
            final_url = %final_url,
            status = status.as_u16(),
            bytes = body.len(),
            response_time_ms,
            "Fetched page"
        );

        Ok(FetchedPage {
            status_code: status.as_u16(),
            body,
            final_url,
            content_type,
            response_time_ms,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
