use contracts::domain::a001_country::{normalize_payload, Country, CountryPayloadError};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::shared::config::{
    countries_api_url, countries_request_url, FETCH_ATTEMPTS, RETRY_DELAY_MS,
};

/// Ошибки загрузки списка стран
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Unexpected response: {0}")]
    Payload(#[from] CountryPayloadError),
}

impl FetchError {
    /// Сетевые сбои, 5xx и 429 имеет смысл повторить; остальное повторять бесполезно
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(status) => *status >= 500 || *status == 429,
            FetchError::Decode(_) | FetchError::Payload(_) => false,
        }
    }
}

fn should_retry(attempt: u32, error: &FetchError) -> bool {
    attempt < FETCH_ATTEMPTS && error.is_retryable()
}

/// Загружает и нормализует список стран с повтором при временных сбоях
pub async fn fetch_countries() -> Result<Vec<Country>, FetchError> {
    let url = countries_request_url(countries_api_url());
    let mut attempt = 1;

    loop {
        let started = js_sys::Date::now();
        match fetch_once(&url).await {
            Ok(countries) => {
                log::info!(
                    "Loaded {} countries in {:.0} ms (attempt {})",
                    countries.len(),
                    js_sys::Date::now() - started,
                    attempt
                );
                return Ok(countries);
            }
            Err(e) if should_retry(attempt, &e) => {
                log::warn!(
                    "Countries fetch attempt {}/{} failed: {}; retrying in {} ms",
                    attempt,
                    FETCH_ATTEMPTS,
                    e,
                    RETRY_DELAY_MS
                );
                TimeoutFuture::new(RETRY_DELAY_MS).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!("Countries fetch failed after {} attempt(s): {}", attempt, e);
                return Err(e);
            }
        }
    }
}

async fn fetch_once(url: &str) -> Result<Vec<Country>, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(normalize_payload(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy() {
        assert!(FetchError::Network("offline".into()).is_retryable());
        assert!(FetchError::Status(503).is_retryable());
        assert!(FetchError::Status(429).is_retryable());
        assert!(!FetchError::Status(404).is_retryable());
        assert!(!FetchError::Decode("eof".into()).is_retryable());
        assert!(!FetchError::Payload(CountryPayloadError::NotAnArray("null")).is_retryable());
    }

    #[test]
    fn test_retry_is_bounded() {
        let err = FetchError::Network("offline".into());
        assert!(should_retry(1, &err));
        assert!(should_retry(FETCH_ATTEMPTS - 1, &err));
        assert!(!should_retry(FETCH_ATTEMPTS, &err));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "Server responded with HTTP 500");
        let err: FetchError = CountryPayloadError::NotAnArray("an object").into();
        assert_eq!(
            err.to_string(),
            "Unexpected response: expected a JSON array of countries, got an object"
        );
    }
}
