use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::schedules::models::ScheduleSet;
use crate::modules::schedules::repositories::ScheduleRepository;

/// Holds the current fee schedule snapshot.
///
/// Readers take an `Arc` to the snapshot and compute against it for as long as
/// they need; `refresh` builds a complete replacement before swapping it in, so
/// a reader never observes a half-loaded schedule. Refreshes run one at a
/// time, so the last one to start is the last one installed.
pub struct ScheduleCatalog {
    repository: Arc<dyn ScheduleRepository>,
    current: RwLock<Arc<ScheduleSet>>,
    refresh_lock: Mutex<()>,
}

impl ScheduleCatalog {
    /// Create a catalog with an empty snapshot; call `refresh` to load
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self {
            repository,
            current: RwLock::new(Arc::new(ScheduleSet::empty())),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Create a catalog and load it once
    pub async fn load(repository: Arc<dyn ScheduleRepository>) -> Result<Self> {
        let catalog = Self::new(repository);
        catalog.refresh().await?;
        Ok(catalog)
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ScheduleSet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Substitute a new snapshot
    pub fn replace(&self, schedules: ScheduleSet) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(schedules);
    }

    /// Re-read the repository and swap in the result.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<ScheduleSet>> {
        let _refreshing = self.refresh_lock.lock().await;
        let source = self.repository.source();
        let raw_records = self.repository.load_records().await.map_err(|e| {
            warn!(source = %source, error = %e, "Fee schedule load failed, keeping previous snapshot");
            e
        })?;

        let raw_count = raw_records.len();
        let records: Vec<_> = raw_records
            .into_iter()
            .filter_map(|raw| {
                let record = raw.into_record();
                if record.is_none() {
                    warn!(source = %source, "Fee schedule row without subclass code or visa name skipped");
                }
                record
            })
            .collect();

        let schedules = Arc::new(ScheduleSet::from_records(records));
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = schedules.clone();
        }

        info!(
            source = %source,
            rows = raw_count,
            records = schedules.len(),
            "Fee schedule snapshot loaded"
        );

        Ok(schedules)
    }
}
