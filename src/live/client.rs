use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::SiteConfig;

const ALADHAN_ENDPOINT: &str = "https://api.aladhan.com/v1/timingsByCity";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LiveError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned code {0}")]
    Api(i64),
    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Today's timings as reported by the AlAdhan API, plus its
/// human-readable date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTimings {
    pub date: String,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    code: i64,
    data: ApiData,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    timings: ApiTimings,
    date: ApiDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiTimings {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Debug, Deserialize)]
struct ApiDate {
    readable: String,
}

/// One-shot AlAdhan client. Every failure mode (transport, non-200 API
/// code, unexpected body shape) surfaces as a LiveError for the caller
/// to log and render; nothing retries.
pub struct LiveClient {
    city: String,
    country: String,
    method: u8,
}

impl LiveClient {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            city: site.city.clone(),
            country: site.country.clone(),
            method: site.method,
        }
    }

    pub fn fetch(&self) -> Result<LiveTimings, LiveError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let body = client
            .get(ALADHAN_ENDPOINT)
            .query(&[
                ("city", self.city.as_str()),
                ("country", self.country.as_str()),
                ("method", &self.method.to_string()),
            ])
            .send()?
            .text()?;

        decode_body(&body)
    }
}

/// Decode an AlAdhan response body. A body that does not match the
/// known shape is a Shape error; a well-formed body with a non-200
/// code is an Api error.
fn decode_body(body: &str) -> Result<LiveTimings, LiveError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    extract_timings(response)
}

fn extract_timings(response: ApiResponse) -> Result<LiveTimings, LiveError> {
    if response.code != 200 {
        return Err(LiveError::Api(response.code));
    }
    let ApiData { timings, date } = response.data;
    Ok(LiveTimings {
        date: date.readable,
        fajr: timings.fajr,
        dhuhr: timings.dhuhr,
        asr: timings.asr,
        maghrib: timings.maghrib,
        isha: timings.isha,
    })
}

/// The static message shown wherever a fetch failed.
pub const FETCH_FAILED_MESSAGE: &str = "Could not load live timings. Check internet / API.";

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "05:02", "Sunrise": "06:21", "Dhuhr": "11:51",
                "Asr": "15:10", "Maghrib": "17:21", "Isha": "18:36"
            },
            "date": { "readable": "05 Dec 2025" }
        }
    }"#;

    #[test]
    fn parses_the_known_response_shape() {
        let live = decode_body(OK_BODY).unwrap();
        assert_eq!(live.date, "05 Dec 2025");
        assert_eq!(live.fajr, "05:02");
        assert_eq!(live.dhuhr, "11:51");
        assert_eq!(live.asr, "15:10");
        assert_eq!(live.maghrib, "17:21");
        assert_eq!(live.isha, "18:36");
    }

    #[test]
    fn non_200_api_code_is_an_error() {
        let body = r#"{"code": 404, "data": {
            "timings": {"Fajr": "", "Dhuhr": "", "Asr": "", "Maghrib": "", "Isha": ""},
            "date": {"readable": ""}
        }}"#;
        match decode_body(body) {
            Err(LiveError::Api(code)) => assert_eq!(code, 404),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_a_shape_error() {
        for body in ["not json", "{}", r#"{"code": 200, "data": {"timings": {}, "date": {}}}"#] {
            match decode_body(body) {
                Err(LiveError::Shape(_)) => {}
                other => panic!("expected Shape error for {:?}, got {:?}", body, other),
            }
        }
    }
}
