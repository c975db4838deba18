//! Liveness, readiness, and basic health reporting.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Basic health payload shared by `/health` and `/health/live`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub timestamp: Timestamp,
    pub message: String,
}

/// Health of one component reported by the readiness probe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub description: String,
    pub data: BTreeMap<String, Value>,
}

/// Readiness payload with uptime, version, and per-component detail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthCheckResponse {
    pub status: HealthStatus,
    pub timestamp: Timestamp,
    pub message: String,
    /// Formatted as `HH:MM:SS`.
    pub uptime: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub components: BTreeMap<String, ComponentHealth>,
}

/// Tracks process start time and builds health payloads.
#[derive(Debug, Clone)]
pub struct HealthCheckService {
    started_at: Timestamp,
    started: Instant,
    version: String,
    episode_count: usize,
}

impl HealthCheckService {
    /// Start the uptime clock. `episode_count` is reported by the data
    /// service component.
    pub fn new(version: impl Into<String>, episode_count: usize) -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
            version: version.into(),
            episode_count,
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Is the process running at all?
    pub fn liveness(&self) -> HealthCheckResponse {
        HealthCheckResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            message: "Application is alive".to_string(),
        }
    }

    /// Is the process ready to serve traffic?
    pub fn readiness(&self) -> DetailedHealthCheckResponse {
        let uptime = self.uptime();
        let data_status = if self.episode_count > 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        let mut components = BTreeMap::new();
        components.insert(
            "application".to_string(),
            ComponentHealth {
                status: HealthStatus::Healthy,
                description: "Application is running normally".to_string(),
                data: BTreeMap::from([
                    ("startTime".to_string(), json!(self.started_at)),
                    ("uptime".to_string(), json!(format_uptime(uptime))),
                ]),
            },
        );
        components.insert(
            "dataService".to_string(),
            ComponentHealth {
                status: data_status,
                description: "In-memory data service is available".to_string(),
                data: BTreeMap::from([
                    ("type".to_string(), json!("In-Memory")),
                    ("initialized".to_string(), json!(true)),
                    ("episodeCount".to_string(), json!(self.episode_count)),
                ]),
            },
        );

        DetailedHealthCheckResponse {
            status: data_status,
            timestamp: Utc::now(),
            message: "Application is ready to serve traffic".to_string(),
            uptime: format_uptime(uptime),
            uptime_seconds: uptime.as_secs(),
            version: self.version.clone(),
            components,
        }
    }

    /// Minimal status kept for simple uptime monitors.
    pub fn health(&self) -> HealthCheckResponse {
        HealthCheckResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            message: "OK".to_string(),
        }
    }
}

/// Format a duration as `HH:MM:SS`; hours are not wrapped at 24.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liveness_is_healthy() {
        let service = HealthCheckService::new("1.0.0", 188);
        let before = Utc::now();
        let result = service.liveness();
        assert_eq!(result.status, HealthStatus::Healthy);
        assert_eq!(result.message, "Application is alive");
        assert!(result.timestamp >= before);
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn health_reports_ok() {
        let result = HealthCheckService::new("1.0.0", 188).health();
        assert_eq!(result.status, HealthStatus::Healthy);
        assert_eq!(result.message, "OK");
    }

    #[test]
    fn readiness_includes_version_and_components() {
        let result = HealthCheckService::new("0.3.1", 188).readiness();
        assert_eq!(result.status, HealthStatus::Healthy);
        assert_eq!(result.message, "Application is ready to serve traffic");
        assert_eq!(result.version, "0.3.1");
        assert!(result.components.contains_key("application"));
        let data = &result.components["dataService"];
        assert_eq!(data.data["type"], "In-Memory");
        assert_eq!(data.data["episodeCount"], 188);
    }

    #[test]
    fn readiness_degrades_without_data() {
        let result = HealthCheckService::new("0.3.1", 0).readiness();
        assert_eq!(result.status, HealthStatus::Degraded);
        assert_eq!(
            result.components["dataService"].status,
            HealthStatus::Degraded
        );
    }

    #[test]
    fn readiness_serializes_camel_case() {
        let json = serde_json::to_value(HealthCheckService::new("1", 1).readiness()).unwrap();
        assert_eq!(json["status"], "Healthy");
        assert!(json["uptimeSeconds"].is_u64());
        assert!(json["components"]["application"]["data"]["startTime"].is_string());
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "01:02:05");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25:01:01");
    }
}
