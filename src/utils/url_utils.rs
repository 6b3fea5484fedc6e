// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// URL 处理错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// 输入无法转换为带主机名的 URL
    #[error("Malformed URL `{input}`: {reason}")]
    Malformed { input: String, reason: String },
}

/// 判断字符串是否已带有 http(s) 协议前缀（大小写不敏感）
fn has_http_scheme(raw: &str) -> bool {
    let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// 对用户输入的 URL 做最小补全，不做任何校验
///
/// 已有 http(s) 前缀的原样返回，否则补上 `https://`
pub fn best_effort_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// 将用户输入规范化为可抓取的绝对 URL
///
/// # 参数
///
/// * `raw` - 用户输入，可能缺少协议
///
/// # 返回值
///
/// * `Ok(Url)` - 带非空主机名的绝对 URL
/// * `Err(UrlError::Malformed)` - 无法解析或缺少主机名
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let candidate = best_effort_url(raw);
    let malformed = |reason: String| UrlError::Malformed {
        input: raw.to_string(),
        reason,
    };

    let url = Url::parse(&candidate).map_err(|e| malformed(e.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(malformed("missing host".to_string())),
    }
}

/// 计算 URL 的源（协议 + 主机 + 非默认端口），不带结尾斜杠
///
/// 对没有主机名的 URL 返回 `None`
pub fn origin_of(url: &Url) -> Option<String> {
    url.host_str()?;
    match url.origin() {
        origin @ url::Origin::Tuple(..) => Some(origin.ascii_serialization()),
        url::Origin::Opaque(_) => None,
    }
}

/// 去掉主机名开头的 `www.`
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// 从 URL 字符串中粗略提取主机名，用于无法解析时的兜底
///
/// 去掉协议、用户信息、路径、查询和端口部分
pub fn guess_host(raw: &str) -> String {
    let rest = raw.trim();
    let rest = match rest.find("://") {
        Some(idx) => &rest[idx + 3..],
        None => rest,
    };
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    host.trim().to_ascii_lowercase()
}

/// 由主机名推导站点名称
///
/// 去掉 `www.`，取第一个点之前的标签并将首字母大写，例如
/// `www.github.com` → `Github`。无法推导时返回 `None`
pub fn site_name_from_host(host: &str) -> Option<String> {
    let label = strip_www(host).split('.').next()?.trim();
    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
