//! WorkNet client, the live occupation source.
//!
//! Only the catalog talks to this client, and only through `OccupationSource`.
//! Every failure comes back as a `SourceError`; nothing here retries or falls back.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::source::{OccupationSource, SourceError};
use crate::models::{OccupationRecord, OccupationSummary, RawOccupation, RawSummary};

pub const DEFAULT_BASE_URL: &str = "http://openapi.work.go.kr/opi/opi/opia";
const JOB_INFO_PATH: &str = "jobInfoSrch.do";
const JOB_SEARCH_PATH: &str = "jobSrch.do";
const RETURN_TYPE: &str = "JSON";

#[derive(Debug, Deserialize)]
struct JobSearchResponse {
    #[serde(default)]
    jobs: Vec<RawSummary>,
}

#[derive(Clone)]
pub struct WorkNetClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WorkNetClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, SourceError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("authKey", self.api_key.as_str()), ("returnType", RETURN_TYPE)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!("WorkNet {path} answered {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl OccupationSource for WorkNetClient {
    fn name(&self) -> &'static str {
        "worknet"
    }

    async fn fetch_occupation(&self, code: &str) -> Result<Option<OccupationRecord>, SourceError> {
        let payload = self.get_json(JOB_INFO_PATH, &[("svcCode", code)]).await?;
        parse_occupation_payload(payload)
    }

    async fn fetch_field_listing(
        &self,
        label: &str,
    ) -> Result<Vec<OccupationSummary>, SourceError> {
        let payload = self
            .get_json(JOB_SEARCH_PATH, &[("keyword", ""), ("field", label)])
            .await?;
        parse_listing_payload(payload, label)
    }
}

/// `null` or `{}` is an answered miss; anything else must decode as a record.
fn parse_occupation_payload(payload: Value) -> Result<Option<OccupationRecord>, SourceError> {
    let is_empty = match &payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Ok(None);
    }

    let raw: RawOccupation = serde_json::from_value(payload)?;
    Ok(Some(OccupationRecord::from(raw)))
}

/// Entries are kept only when they carry the requested WorkNet field label.
fn parse_listing_payload(
    payload: Value,
    label: &str,
) -> Result<Vec<OccupationSummary>, SourceError> {
    let response: JobSearchResponse = serde_json::from_value(payload)?;
    Ok(response
        .jobs
        .into_iter()
        .map(|raw| raw.into_summary(label))
        .filter(|summary| summary.field == label)
        .collect())
}
