use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::schedules::models::RawFeeScheduleRecord;

/// Read-only source of fee schedule records
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Fetch every stored record in its raw, unmapped form
    async fn load_records(&self) -> Result<Vec<RawFeeScheduleRecord>>;

    /// Human-readable description of where records come from, for logs
    fn source(&self) -> String;
}

/// Serialization formats a schedule document may be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    Json,
    Yaml,
}

impl ScheduleFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ScheduleFormat::Json),
            "yaml" | "yml" => Some(ScheduleFormat::Yaml),
            _ => None,
        }
    }
}

/// Accepted top-level document shapes: a bare list or `{ records: [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScheduleDocument {
    List(Vec<RawFeeScheduleRecord>),
    Wrapped { records: Vec<RawFeeScheduleRecord> },
}

impl ScheduleDocument {
    fn into_records(self) -> Vec<RawFeeScheduleRecord> {
        match self {
            ScheduleDocument::List(records) => records,
            ScheduleDocument::Wrapped { records } => records,
        }
    }
}

/// Decode a schedule document from text
pub fn parse_schedule_document(
    contents: &str,
    format: ScheduleFormat,
) -> Result<Vec<RawFeeScheduleRecord>> {
    let document: ScheduleDocument = match format {
        ScheduleFormat::Json => serde_json::from_str(contents)?,
        ScheduleFormat::Yaml => serde_yaml::from_str(contents)?,
    };

    Ok(document.into_records())
}

/// Schedule repository backed by a JSON or YAML file
pub struct FileScheduleRepository {
    path: PathBuf,
    format: ScheduleFormat,
}

impl FileScheduleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = ScheduleFormat::from_path(&path).ok_or_else(|| {
            AppError::configuration(format!(
                "Unsupported fee schedule file type: {} (expected .json, .yaml or .yml)",
                path.display()
            ))
        })?;

        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScheduleRepository for FileScheduleRepository {
    async fn load_records(&self) -> Result<Vec<RawFeeScheduleRecord>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::schedule_load(format!("Cannot read {}: {}", self.path.display(), e))
        })?;

        let records = parse_schedule_document(&contents, self.format)?;

        info!(
            path = %self.path.display(),
            count = records.len(),
            "Read fee schedule document"
        );

        Ok(records)
    }

    fn source(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Schedule repository holding records in memory
#[derive(Default)]
pub struct InMemoryScheduleRepository {
    records: RwLock<Vec<RawFeeScheduleRecord>>,
}

impl InMemoryScheduleRepository {
    pub fn new(records: Vec<RawFeeScheduleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Swap the stored records; visible on the next load
    pub async fn replace(&self, records: Vec<RawFeeScheduleRecord>) {
        *self.records.write().await = records;
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn load_records(&self) -> Result<Vec<RawFeeScheduleRecord>> {
        Ok(self.records.read().await.clone())
    }

    fn source(&self) -> String {
        "memory".to_string()
    }
}
