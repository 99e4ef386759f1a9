use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talentapp::recruitment::{InMemoryEntityStore, RecruitmentService};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedService = Arc<RecruitmentService<InMemoryEntityStore>>;

/// Service over a fresh process-local store. Data lives as long as the process.
pub(crate) fn build_service() -> SharedService {
    Arc::new(RecruitmentService::new(Arc::new(
        InMemoryEntityStore::default(),
    )))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
