// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 抓取接口和目录（分类、网站）的增删改查接口
pub mod category_handler;
pub mod scrape_handler;
pub mod website_handler;
