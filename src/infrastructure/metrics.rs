// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 安装 Prometheus 指标导出器
///
/// 未启用时不安装记录器，`metrics` 宏调用成为空操作。
/// 地址无效或端口被占用时只记录警告，不影响服务启动。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(listen_addr = %settings.listen_addr, error = %e, "Invalid metrics address");
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!("scrape_requests_total", "Website info scrape requests");
    describe_counter!(
        "scrape_fallback_total",
        "Scrapes answered with the hostname fallback, by reason"
    );
    describe_histogram!(
        "scrape_duration_seconds",
        Unit::Seconds,
        "Time spent answering a scrape request"
    );

    info!("Metrics exporter listening on {}", addr);
}
