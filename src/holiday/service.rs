//! Holiday fetcher and the per-year memoizing service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::config::HolidayConfig;
use crate::{MoredentError, Result};

use super::expand::expand_ranges;
use super::types::{HolidayCalendar, HolidayRange, HolidayResponse};

/// User agent sent to the holiday source.
const USER_AGENT: &str = "moredent/0.1 (holiday calendar)";

/// HTTP client for the external holiday source.
///
/// One GET per year with a `year` query parameter, bounded by the
/// configured total timeout. Any transport, status, or parse failure is
/// surfaced as [`MoredentError::Holiday`]; there is no retry.
pub struct HolidayFetcher {
    client: Client,
    endpoint: String,
}

impl HolidayFetcher {
    /// Create a fetcher from the holiday configuration.
    pub fn new(config: &HolidayConfig) -> Result<Self> {
        validate_endpoint(&config.endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MoredentError::Holiday(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the raw holiday ranges for one year.
    pub async fn fetch(&self, year: i32) -> Result<Vec<HolidayRange>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("year", year.to_string())])
            .send()
            .await
            .map_err(|e| MoredentError::Holiday(format!("failed to fetch holidays: {e}")))?;

        if !response.status().is_success() {
            return Err(MoredentError::Holiday(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body: HolidayResponse = response
            .json()
            .await
            .map_err(|e| MoredentError::Holiday(format!("failed to parse response: {e}")))?;

        Ok(body.result.data)
    }
}

/// Check that the holiday endpoint is an absolute http(s) URL.
fn validate_endpoint(endpoint: &str) -> Result<()> {
    let parsed = url::Url::parse(endpoint)
        .map_err(|e| MoredentError::Config(format!("invalid holiday endpoint: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(MoredentError::Config(format!(
            "unsupported holiday endpoint scheme: {scheme}"
        ))),
    }
}

/// Per-year memoizing holiday calendar service.
///
/// The first request for a year fetches and expands the source ranges;
/// the result is kept for the life of this instance. There is no eviction
/// or refresh: the source changes at most once a year, and serving a stale
/// calendar until restart is an accepted trade-off. Concurrent first
/// requests for the same year are not deduplicated; both fetch and the
/// last insert wins.
pub struct HolidayService {
    fetcher: HolidayFetcher,
    cache: Mutex<HashMap<i32, Arc<HolidayCalendar>>>,
}

impl HolidayService {
    /// Create the service from the holiday configuration.
    pub fn new(config: &HolidayConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HolidayFetcher::new(config)?,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The per-day holiday calendar for `year`.
    ///
    /// Served from cache when available; otherwise fetched, expanded, and
    /// cached. A range crossing into the next year is indexed under the
    /// requested year only.
    pub async fn get_holidays(&self, year: i32) -> Result<Arc<HolidayCalendar>> {
        if let Some(cached) = self.cached(year) {
            return Ok(cached);
        }

        let ranges = self.fetcher.fetch(year).await?;
        let calendar = Arc::new(expand_ranges(&ranges));
        info!(year, days = calendar.len(), "holiday calendar cached");

        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .insert(year, Arc::clone(&calendar));
        Ok(calendar)
    }

    /// The cached calendar for `year`, if one exists.
    pub fn cached(&self, year: i32) -> Option<Arc<HolidayCalendar>> {
        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .get(&year)
            .map(Arc::clone)
    }

    #[cfg(test)]
    pub(crate) fn prime(&self, year: i32, calendar: HolidayCalendar) {
        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .insert(year, Arc::new(calendar));
    }
}
