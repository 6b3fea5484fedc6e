// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::scrape_service::ScrapeService;
use crate::infrastructure::repositories::category_repo_impl::CategoryRepoImpl;
use crate::infrastructure::repositories::website_repo_impl::WebsiteRepoImpl;
use crate::presentation::handlers::{category_handler, scrape_handler, website_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载依赖的路由，依赖通过 `Extension` 层注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route("/api/scrape", post(scrape_handler::scrape_website))
        .route(
            "/api/categories",
            get(category_handler::list_categories::<CategoryRepoImpl>)
                .post(category_handler::create_category::<CategoryRepoImpl>),
        )
        .route(
            "/api/categories/{id}",
            get(category_handler::get_category::<CategoryRepoImpl>)
                .put(category_handler::update_category::<CategoryRepoImpl>)
                .delete(category_handler::delete_category::<CategoryRepoImpl>),
        )
        .route(
            "/api/categories/{id}/move",
            post(category_handler::move_category::<CategoryRepoImpl>),
        )
        .route(
            "/api/websites",
            get(website_handler::list_websites::<WebsiteRepoImpl>)
                .post(website_handler::create_website::<WebsiteRepoImpl>),
        )
        .route(
            "/api/websites/{id}",
            get(website_handler::get_website::<WebsiteRepoImpl>)
                .put(website_handler::update_website::<WebsiteRepoImpl>)
                .delete(website_handler::delete_website::<WebsiteRepoImpl>),
        )
        .route(
            "/api/websites/{id}/move",
            post(website_handler::move_website::<WebsiteRepoImpl>),
        );

    Router::new().merge(public_routes).merge(api_routes)
}

/// 组装完整应用：路由、依赖注入和请求日志
///
/// # 参数
///
/// * `categories` - 分类仓库
/// * `websites` - 网站仓库
/// * `scrape_service` - 抓取服务
pub fn app(
    categories: Arc<CategoryRepoImpl>,
    websites: Arc<WebsiteRepoImpl>,
    scrape_service: Arc<ScrapeService>,
) -> Router {
    routes()
        .layer(Extension(categories))
        .layer(Extension(websites))
        .layer(Extension(scrape_service))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
