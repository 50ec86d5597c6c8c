//! Admin observability models

use serde::{Deserialize, Serialize};

/// Ingestion lag below which a generator counts as on time
pub const INGESTION_LAG_WARN_MINUTES: u32 = 5;

/// Health of a background worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkerHealth {
    pub name: String,
    pub status: WorkerStatus,
    pub last_run_secs_ago: u64,
    pub errors_last_hour: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Healthy,
    Degraded,
}

/// Metering ingestion figures for one generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngestionStatus {
    pub generator_id: String,
    pub name: String,
    pub last_slice_secs_ago: u64,
    pub lag_minutes: u32,
    pub success_24h: u32,
    pub failures_24h: u32,
}

impl IngestionStatus {
    pub fn is_on_time(&self) -> bool {
        self.lag_minutes < INGESTION_LAG_WARN_MINUTES
    }
}

/// Aggregated error log line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    /// "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
    pub component: String,
    pub level: LogLevel,
    pub message: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warning => write!(f, "warning"),
        }
    }
}

/// Headline numbers of the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub healthy_workers: usize,
    pub degraded_workers: usize,
    pub lagging_generators: usize,
    pub errors_last_hour: u32,
}

impl SystemHealth {
    pub fn summarize(workers: &[WorkerHealth], ingestion: &[IngestionStatus]) -> Self {
        let healthy_workers = workers
            .iter()
            .filter(|w| w.status == WorkerStatus::Healthy)
            .count();

        Self {
            healthy_workers,
            degraded_workers: workers.len() - healthy_workers,
            lagging_generators: ingestion.iter().filter(|g| !g.is_on_time()).count(),
            errors_last_hour: workers.iter().map(|w| w.errors_last_hour).sum(),
        }
    }
}
