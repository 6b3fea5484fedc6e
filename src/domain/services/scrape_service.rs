// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::website_info::{synthesized_description, SiteMetadata, WebsiteInfo};
use crate::domain::services::icon_resolver::IconResolver;
use crate::domain::services::metadata_extractor::MetadataExtractor;
use crate::engines::traits::{FetchRequest, PageFetcher};
use crate::utils::url_utils::{best_effort_url, guess_host, normalize_url, site_name_from_host};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

/// 无法从主机名推导名称时使用的站点名
pub const UNKNOWN_SITE_NAME: &str = "Website";

/// 网站信息抓取服务
///
/// 组合 URL 规范化、页面抓取、元数据提取和图标解析。`scrape` 从不返回错误：
/// 任何失败都退化为仅由主机名构造的结果，并记录日志。
pub struct ScrapeService {
    fetcher: Arc<dyn PageFetcher>,
    icon_resolver: IconResolver,
    timeout: Duration,
}

impl ScrapeService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, settings: &ScraperSettings) -> Self {
        Self {
            fetcher,
            icon_resolver: IconResolver::new(settings.placeholder_icon.clone()),
            timeout: settings.timeout(),
        }
    }

    /// 抓取网站信息
    ///
    /// # 参数
    ///
    /// * `raw_url` - 用户输入的地址，可以缺少协议
    ///
    /// # 返回值
    ///
    /// 标题、描述、图标和地址均非空的 `WebsiteInfo`
    pub async fn scrape(&self, raw_url: &str) -> WebsiteInfo {
        let start = Instant::now();
        counter!("scrape_requests_total").increment(1);

        let info = self.scrape_inner(raw_url).await;

        histogram!("scrape_duration_seconds").record(start.elapsed().as_secs_f64());
        info
    }

    /// 使用调用方给定的超时时间抓取，超时同样退化为兜底结果
    pub async fn scrape_with_timeout(&self, raw_url: &str, timeout: Duration) -> WebsiteInfo {
        let start = Instant::now();
        counter!("scrape_requests_total").increment(1);

        let info = match tokio::time::timeout(timeout, self.scrape_inner(raw_url)).await {
            Ok(info) => info,
            Err(_) => {
                warn!(url = raw_url, ?timeout, "Scrape deadline exceeded, using fallback");
                counter!("scrape_fallback_total", "reason" => "deadline").increment(1);
                match normalize_url(raw_url) {
                    Ok(url) => self.fallback_for_url(&url),
                    Err(_) => self.fallback_for_raw(raw_url),
                }
            }
        };

        histogram!("scrape_duration_seconds").record(start.elapsed().as_secs_f64());
        info
    }

    async fn scrape_inner(&self, raw_url: &str) -> WebsiteInfo {
        let url = match normalize_url(raw_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = raw_url, error = %e, "Cannot normalize URL, using fallback");
                counter!("scrape_fallback_total", "reason" => "malformed_url").increment(1);
                return self.fallback_for_raw(raw_url);
            }
        };

        let request = FetchRequest {
            url: url.to_string(),
            timeout: self.timeout,
        };

        let page = match self.fetcher.fetch(&request).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, fetcher = self.fetcher.name(), error = %e, "Fetch failed, using fallback");
                counter!("scrape_fallback_total", "reason" => e.kind()).increment(1);
                return self.fallback_for_url(&url);
            }
        };

        // Relative icon references are relative to where we actually landed
        let base = Url::parse(&page.final_url).unwrap_or_else(|_| url.clone());
        let extracted = MetadataExtractor::extract(&page.body, &base);
        let icon = self
            .icon_resolver
            .resolve(extracted.icon_href.as_deref(), &base);

        info!(url = %url, title = %extracted.title, "Scraped website info");

        WebsiteInfo {
            title: extracted.title,
            description: extracted.description,
            icon,
            url: url.to_string(),
            metadata: extracted.metadata,
        }
    }

    /// 由已规范化的 URL 构造兜底结果
    pub fn fallback_for_url(&self, url: &Url) -> WebsiteInfo {
        let host = url.host_str().unwrap_or_default();
        self.fallback(host, url.to_string())
    }

    /// 由无法解析的原始输入构造兜底结果
    pub fn fallback_for_raw(&self, raw_url: &str) -> WebsiteInfo {
        let guess = best_effort_url(raw_url);
        let host = guess_host(&guess);
        self.fallback(&host, guess)
    }

    fn fallback(&self, host: &str, url: String) -> WebsiteInfo {
        let name = site_name_from_host(host).unwrap_or_else(|| UNKNOWN_SITE_NAME.to_string());
        WebsiteInfo {
            description: synthesized_description(&name),
            title: name,
            icon: self.icon_resolver.placeholder().to_string(),
            url,
            metadata: SiteMetadata::default(),
        }
    }
}

#[cfg(test)]
#[path = "scrape_service_test.rs"]
mod tests;
