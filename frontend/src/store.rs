use thiserror::Error;

use crate::config::ConfigError;
use crate::funnel::lead::{Lead, StoredLead};

pub mod rest;

pub const SIGNUPS_TABLE: &str = "signups";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("store is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("request failed: {0}")]
    Network(String),
    #[error("store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected store response: {0}")]
    Decode(String),
}

/// The three operations the page needs from the hosted signups table.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait LeadStore {
    /// Writes one lead without asking for it back.
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError>;

    /// Writes one lead and returns the rows as stored.
    async fn insert_returning(&self, lead: &Lead) -> Result<Vec<StoredLead>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Newest first by `created_at`.
    async fn recent(&self, limit: usize) -> Result<Vec<StoredLead>, StoreError>;
}
