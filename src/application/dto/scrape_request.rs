// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 调用方超时时间的允许范围（毫秒），超出范围时截断而不是拒绝
pub const MIN_TIMEOUT_MS: i64 = 100;
pub const MAX_TIMEOUT_MS: i64 = 60_000;

/// 网站信息抓取请求
///
/// `url` 缺失与空白一样由处理器返回 400，而不是交给 JSON 解析器拒绝
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequestDto {
    /// 要抓取的网站地址，可以省略协议
    #[serde(default)]
    pub url: Option<String>,
    /// 调用方期望的最长等待时间（毫秒），超过后返回兜底结果
    pub timeout_ms: Option<i64>,
}

impl ScrapeRequestDto {
    /// 去掉首尾空白后的非空地址
    pub fn target(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// 截断到允许范围内的调用方超时时间
    pub fn deadline(&self) -> Option<Duration> {
        self.timeout_ms
            .map(|ms| Duration::from_millis(ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS) as u64))
    }
}
