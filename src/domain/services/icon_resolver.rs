// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::url_utils::origin_of;
use url::Url;

/// 页面未声明图标时使用的约定路径
pub const DEFAULT_FAVICON_PATH: &str = "/favicon.ico";

/// 图标地址解析器
///
/// 把页面中声明的图标引用转换为绝对地址。非绝对引用一律相对于页面的源
/// （协议 + 主机 + 端口）解析，而不是相对于页面路径。
#[derive(Debug, Clone)]
pub struct IconResolver {
    placeholder: String,
}

impl IconResolver {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// 占位图标路径
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// 解析图标地址，从不失败
    ///
    /// # 参数
    ///
    /// * `raw_href` - `<link rel="icon">` 的 href，缺失时使用 `/favicon.ico`
    /// * `page_url` - 实际抓取的页面地址
    ///
    /// # 返回值
    ///
    /// 图标的绝对地址；页面地址没有可用的源时返回占位图路径
    pub fn resolve(&self, raw_href: Option<&str>, page_url: &Url) -> String {
        let candidate = raw_href
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .unwrap_or(DEFAULT_FAVICON_PATH);

        if has_prefix_ignore_case(candidate, "http")
            || has_prefix_ignore_case(candidate, "data:")
        {
            return candidate.to_string();
        }

        if let Some(rest) = candidate.strip_prefix("//") {
            return format!("{}://{}", page_url.scheme(), rest);
        }

        let Some(origin) = origin_of(page_url) else {
            return self.placeholder.clone();
        };

        if candidate.starts_with('/') {
            format!("{}{}", origin, candidate)
        } else {
            format!("{}/{}", origin, candidate)
        }
    }
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
