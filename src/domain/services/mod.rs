// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 元数据提取（metadata_extractor）：从 HTML 中提取标题、描述、图标和附加元数据
/// - 图标解析（icon_resolver）：将图标引用解析为绝对地址或占位图
/// - 排序（ordering_service）：计算上移/下移需要写回的排序值
/// - 抓取（scrape_service）：编排规范化、抓取、提取和兜底
///
/// 这些服务不直接访问数据库，抓取通过 `PageFetcher` 特质注入。
pub mod icon_resolver;
pub mod metadata_extractor;
pub mod ordering_service;
pub mod scrape_service;
