// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义HTTP请求体与领域模型之间的转换
pub mod category_request;
pub mod move_request;
pub mod scrape_request;
pub mod website_request;
