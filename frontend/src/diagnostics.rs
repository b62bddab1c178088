use chrono::Utc;
use log::error;
use serde::Serialize;

use crate::funnel::lead::{submission_timestamp, Lead};
use crate::store::LeadStore;

pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Connection,
    Insert,
    Recent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProbeReport {
    pub ok: bool,
    pub text: String,
}

impl Probe {
    pub fn label(self) -> &'static str {
        match self {
            Probe::Connection => "Test Connection",
            Probe::Insert => "Test Insert",
            Probe::Recent => "View Recent Data",
        }
    }

    /// Shown while the probe is running.
    pub fn progress(self) -> &'static str {
        match self {
            Probe::Connection => "Testing connection...",
            Probe::Insert => "Testing insert...",
            Probe::Recent => "Fetching data...",
        }
    }

    pub async fn run<S: LeadStore>(self, store: &S) -> ProbeReport {
        match self {
            Probe::Connection => match store.count().await {
                Ok(count) => ProbeReport::ok(format!(
                    "✅ Connection successful! Table exists and is accessible ({} rows).",
                    count
                )),
                Err(e) => {
                    error!("Connection error: {}", e);
                    ProbeReport::failed(format!("❌ Error: {}", e))
                }
            },
            Probe::Insert => match store.insert_returning(&sample_lead()).await {
                Ok(rows) => ProbeReport::ok(format!("✅ Insert successful! Data: {}", pretty(&rows))),
                Err(e) => {
                    error!("Insert error: {}", e);
                    ProbeReport::failed(format!("❌ Insert Error: {}", e))
                }
            },
            Probe::Recent => match store.recent(RECENT_LIMIT).await {
                Ok(rows) => ProbeReport::ok(format!("✅ Data fetched! Records: {}", pretty(&rows))),
                Err(e) => {
                    error!("Fetch error: {}", e);
                    ProbeReport::failed(format!("❌ Fetch Error: {}", e))
                }
            },
        }
    }
}

impl ProbeReport {
    fn ok(text: String) -> Self {
        Self { ok: true, text }
    }

    fn failed(text: String) -> Self {
        Self { ok: false, text }
    }
}

/// Fixed row written by the insert probe, tagged so it is easy to clean up.
pub fn sample_lead() -> Lead {
    Lead {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        event: "Test Event".to_string(),
        date: "2025-01-01T12:00:00-04:00".to_string(),
        timestamp: submission_timestamp(Utc::now()),
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}
