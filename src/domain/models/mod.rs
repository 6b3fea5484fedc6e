// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 分类（category）：导航页上的分组
/// - 网站（website）：分类下的导航条目
/// - 抓取结果（website_info）：从目标站点提取的标题、描述和图标
/// - 排序（ordering）：上移/下移的方向
pub mod category;
pub mod ordering;
pub mod website;
pub mod website_info;
