//! Live check of a running backend's status endpoint.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use helpmap_core::api::types::ServiceStatus;
use helpmap_core::{ApiConfig, StatusApi};

use crate::reports::ScenarioResult;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetch and decode `GET /api/status` from `base_url`.
pub async fn fetch_status(base_url: &str) -> Result<ServiceStatus> {
    let call = StatusApi::check_status();
    let url = ApiConfig::new(base_url).url_for(&call.request);
    log::debug!("probing {url}");
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("building HTTP client")?;
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;
    let status = response.status().as_u16();
    let body = response.text().await.context("reading status body")?;
    call.decode_response(status, &body)
        .with_context(|| format!("decoding {url}"))
}

/// Probe the backend and fold the outcome into a report row.
pub async fn probe_api(base_url: &str) -> ScenarioResult {
    let started = Instant::now();
    let failure = match fetch_status(base_url).await {
        Ok(status) if status.is_ok() => {
            log::info!("{} is up: {}", status.service, status.message);
            None
        }
        Ok(status) => Some(format!("service reported status `{}`", status.status)),
        Err(err) => Some(format!("{err:#}")),
    };
    let elapsed = started.elapsed();
    ScenarioResult {
        scenario_name: "api-probe".to_string(),
        passed: failure.is_none(),
        iterations_run: 1,
        successful_iterations: usize::from(failure.is_none()),
        failures: failure.into_iter().collect(),
        average_duration: elapsed,
        performance_data: vec![elapsed],
    }
}
