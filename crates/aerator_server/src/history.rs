//! Append-only comparison history log.
//!
//! Every successful comparison is summarized as one JSON line. Writing is
//! fire-and-forget: the record task runs after the response is already
//! determined, and a write failure is logged without affecting the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

use aerator_models::ComparisonResult;

/// One line of the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the comparison completed
    pub timestamp: DateTime<Utc>,
    /// Names of the compared aerators, in request order
    pub aerators: Vec<String>,
    /// Total oxygen demand the fleets were sized against, kg O₂/h
    pub tod_kg_o2_h: f64,
    /// Winning aerator name
    pub winner: String,
    /// Winner break-even price per losing aerator, USD
    pub equilibrium_prices: BTreeMap<String, f64>,
}

impl HistoryEntry {
    /// Summarize a finished comparison, stamped with the current time.
    pub fn from_result(result: &ComparisonResult) -> Self {
        Self {
            timestamp: Utc::now(),
            aerators: result
                .aerator_results
                .iter()
                .map(|r| r.name.clone())
                .collect(),
            tod_kg_o2_h: result.tod.total_kg_o2_h,
            winner: result.winner.clone(),
            equilibrium_prices: result.equilibrium_prices.clone(),
        }
    }
}

/// JSONL writer for the comparison history.
#[derive(Debug)]
pub struct HistoryWriter {
    path: PathBuf,
}

impl HistoryWriter {
    /// Create a writer appending to the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file on first use.
    pub async fn append(&self, entry: &HistoryEntry) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        // tokio::fs::File buffers writes; flush before drop so the entry is
        // on disk by the time `append` returns Ok.
        file.flush().await?;
        Ok(())
    }

    /// Record an entry in the background.
    ///
    /// Failures are traced; the caller's response is never affected.
    pub fn record(self: &Arc<Self>, entry: HistoryEntry) {
        let writer = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = writer.append(&entry).await {
                tracing::warn!(
                    error = %e,
                    path = %writer.path.display(),
                    "failed to append comparison history"
                );
            }
        });
    }
}
