use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::config::ScoresConfig;
use crate::error::{Result, ScoresError};

static CLIENT: OnceCell<(Duration, Client)> = OnceCell::new();

/// Shared client for the process. Built on first use with that call's
/// timeout; later calls get the same client whatever timeout they ask for.
pub fn http_client(timeout: Duration) -> Result<&'static Client> {
    let (built_with, client) = CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(timeout)
            .build()
            .map(|client| (timeout, client))
            .map_err(|e| ScoresError::Fetch {
                url: String::new(),
                reason: format!("failed to build http client: {e}"),
            })
    })?;
    if *built_with != timeout {
        warn!(
            requested = ?timeout,
            in_use = ?built_with,
            "http client already built, keeping its timeout"
        );
    }
    Ok(client)
}

/// GETs `url` with the given query parameters and returns the body text.
pub fn fetch_text(cfg: &ScoresConfig, url: &str, params: &[(&str, String)]) -> Result<String> {
    let client = http_client(Duration::from_secs(cfg.timeout_secs))?;
    let fetch_err = |reason: String| ScoresError::Fetch {
        url: url.to_string(),
        reason,
    };

    debug!(url, ?params, "fetching page");
    let resp = client
        .get(url)
        .query(params)
        .header(USER_AGENT, cfg.user_agent.as_str())
        .send()
        .map_err(|e| fetch_err(format!("request failed: {e}")))?;
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| fetch_err(format!("failed reading body: {e}")))?;
    if !status.is_success() {
        return Err(fetch_err(format!("http {status}")));
    }
    debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}
