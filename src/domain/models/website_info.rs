// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 站点附加元数据
///
/// 固定键集合；缺失的键在 JSON 中直接省略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// `<meta name="keywords">` 的内容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// `<html lang>` 属性
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SiteMetadata {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_none() && self.language.is_none()
    }
}

/// 网站信息抓取结果
///
/// 每次抓取生成的纯值对象，不会被直接持久化。四个字符串字段保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteInfo {
    /// 页面标题
    pub title: String,
    /// 页面描述
    pub description: String,
    /// 图标的绝对地址或占位图路径
    pub icon: String,
    /// 实际抓取的规范化 URL
    pub url: String,
    /// 附加元数据
    #[serde(default)]
    pub metadata: SiteMetadata,
}

/// 由站点名称合成的描述文案
pub fn synthesized_description(name: &str) -> String {
    format!("{} 网站", name)
}
