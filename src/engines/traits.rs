// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// 非 2xx 响应或网络层失败（DNS、连接、TLS、超时）
    #[error("Fetch failed{}: {reason}", status_suffix(.status))]
    FetchFailed {
        /// HTTP 状态码，网络层失败时为空
        status: Option<u16>,
        /// 失败原因
        reason: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|s| format!(" with status {}", s))
        .unwrap_or_default()
}

impl FetchError {
    pub fn failed(status: Option<u16>, reason: impl Into<String>) -> Self {
        FetchError::FetchFailed {
            status,
            reason: reason.into(),
        }
    }

    /// 用于指标标签的简短分类
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::FetchFailed { status: Some(_), .. } => "http_status",
            FetchError::FetchFailed { status: None, .. } => "network",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };
        FetchError::FetchFailed {
            status: err.status().map(|s| s.as_u16()),
            reason,
        }
    }
}

/// 页面抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 本次请求的超时时间，覆盖连接、响应头和响应体
    pub timeout: Duration,
}

/// 页面抓取响应
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub body: String,
    /// 跟随重定向后的最终地址
    pub final_url: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取器特质
///
/// 单次、有界时长的 GET 请求；不做重试，重试策略属于调用方
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchedPage, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
