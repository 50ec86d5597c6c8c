//! Admin observability service: workers, ingestion and the error log

use std::sync::Arc;

use serde::Serialize;
use shared::fixtures::Dashboard;
use shared::format::relative_age;
use shared::{ErrorLogEntry, IngestionStatus, SystemHealth, WorkerHealth};

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerView {
    #[serde(flatten)]
    pub worker: WorkerHealth,
    /// e.g. "2m ago"
    pub last_run: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionView {
    #[serde(flatten)]
    pub status: IngestionStatus,
    pub last_slice: String,
    pub on_time: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub health: SystemHealth,
    pub workers: Vec<WorkerView>,
    pub ingestion: Vec<IngestionView>,
    pub error_log: Vec<ErrorLogEntry>,
}

pub struct AdminService {
    dashboard: Arc<Dashboard>,
}

impl AdminService {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    pub fn overview(&self) -> AdminOverview {
        let dashboard = &self.dashboard;

        AdminOverview {
            health: SystemHealth::summarize(&dashboard.workers, &dashboard.ingestion),
            workers: dashboard
                .workers
                .iter()
                .map(|w| WorkerView {
                    last_run: relative_age(w.last_run_secs_ago),
                    worker: w.clone(),
                })
                .collect(),
            ingestion: dashboard
                .ingestion
                .iter()
                .map(|g| IngestionView {
                    last_slice: relative_age(g.last_slice_secs_ago),
                    on_time: g.is_on_time(),
                    status: g.clone(),
                })
                .collect(),
            error_log: dashboard.error_log.clone(),
        }
    }

    /// Error log as CSV with a header row
    pub fn export_errors_csv(&self) -> AppResult<String> {
        Self::export_to_csv(&self.dashboard.error_log)
    }

    fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
    }
}
