// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website_info::{synthesized_description, SiteMetadata};
use crate::utils::url_utils::strip_www;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use url::Url;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("valid title regex"));

// Quoted attribute values may contain `>`, so the tag body alternates between
// unquoted characters and whole quoted strings. A quoted run never crosses `<`;
// an unbalanced quote is taken as a plain character and the tag ends at `>`.
static META_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta\b(?:[^>"']|"[^"<]*"|'[^'<]*'|["'])*>"#).expect("valid meta regex")
});

static LINK_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<link\b(?:[^>"']|"[^"<]*"|'[^'<]*'|["'])*>"#).expect("valid link regex")
});

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<html\b(?:[^>"']|"[^"<]*"|'[^'<]*'|["'])*>"#).expect("valid html regex")
});

static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("valid attribute regex")
});

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));

/// 从页面中提取到的信息
///
/// `title` 与 `description` 已应用兜底规则，保证非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    pub description: String,
    /// 原始的图标引用，尚未解析为绝对地址
    pub icon_href: Option<String>,
    pub metadata: SiteMetadata,
}

/// 元数据提取器
///
/// 基于正则的启发式扫描，不构建 DOM。每个字段独立提取，任何一个标签缺失都不会影响其他字段。
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// 提取标题、描述、图标引用、关键字和语言
    ///
    /// # 参数
    ///
    /// * `html` - 原始页面内容，可以为空或残缺
    /// * `page_url` - 页面地址，用于标题兜底
    pub fn extract(html: &str, page_url: &Url) -> ExtractedPage {
        let html = COMMENT_RE.replace_all(html, "");

        let title = Self::title(&html).unwrap_or_else(|| Self::title_from_url(page_url));
        let description = Self::meta_content(&html, "description")
            .unwrap_or_else(|| synthesized_description(&title));

        ExtractedPage {
            description,
            icon_href: Self::icon_href(&html),
            metadata: SiteMetadata {
                keywords: Self::meta_content(&html, "keywords"),
                language: Self::language(&html),
            },
            title,
        }
    }

    /// 第一个 `<title>` 的文本
    pub fn title(html: &str) -> Option<String> {
        TITLE_RE
            .captures(html)
            .and_then(|c| c.get(1))
            .and_then(|m| clean_text(m.as_str()))
    }

    /// 第一个 `name` 匹配的 `<meta>` 的 `content`，属性顺序不限
    pub fn meta_content(html: &str, name: &str) -> Option<String> {
        META_TAG_RE
            .find_iter(html)
            .map(|m| parse_attributes(m.as_str()))
            .find(|attrs| {
                attrs
                    .get("name")
                    .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
            })
            .and_then(|attrs| attrs.get("content").and_then(|c| clean_text(c)))
    }

    /// `rel="icon"` 或 `rel="shortcut icon"` 的 `<link>` 的 `href`，属性顺序不限
    pub fn icon_href(html: &str) -> Option<String> {
        LINK_TAG_RE
            .find_iter(html)
            .map(|m| parse_attributes(m.as_str()))
            .filter(|attrs| attrs.get("rel").is_some_and(|rel| is_icon_rel(rel)))
            .find_map(|attrs| attrs.get("href").and_then(|h| clean_text(h)))
    }

    /// `<html lang>` 属性
    pub fn language(html: &str) -> Option<String> {
        HTML_TAG_RE
            .find(html)
            .map(|m| parse_attributes(m.as_str()))
            .and_then(|attrs| attrs.get("lang").and_then(|l| clean_text(l)))
    }

    /// 以去掉 `www.` 的主机名作为标题
    fn title_from_url(page_url: &Url) -> String {
        match page_url.host_str() {
            Some(host) if !strip_www(host).is_empty() => strip_www(host).to_string(),
            _ => page_url.to_string(),
        }
    }
}

/// 解析单个标签的属性，属性名统一小写，同名属性保留第一个
fn parse_attributes(tag: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for caps in ATTRIBUTE_RE.captures_iter(tag) {
        let Some(name) = caps.get(1) else { continue };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();
        attrs
            .entry(name.as_str().to_ascii_lowercase())
            .or_insert_with(|| value.to_string());
    }
    attrs
}

fn is_icon_rel(rel: &str) -> bool {
    let normalized = rel
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    normalized == "icon" || normalized == "shortcut icon"
}

/// 解码 HTML 实体并折叠空白，空字符串视为缺失
fn clean_text(raw: &str) -> Option<String> {
    let decoded = html_escape::decode_html_entities(raw);
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

#[cfg(test)]
#[path = "metadata_extractor_test.rs"]
mod tests;
