// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// Start the Prometheus exporter on the configured listen address.
/// A bad address or an occupied port is logged and skipped; the server
/// itself keeps starting.
pub fn init_metrics(settings: &MetricsSettings) {
    let addr: SocketAddr = match format!("{}:{}", settings.host, settings.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address {}:{}: {}",
                settings.host, settings.port, e
            );
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Prometheus exporter not started on {}: {}", addr, e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}
