//! In-memory store implementation for tests and ephemeral use.

use super::{
    BedRecord, BedSubscription, BoxFuture, GardenStore, PathRecord, StorageError, StorageResult,
};
use crate::shapes::{BedId, GardenId, WalkwayId};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Sender};
use std::sync::{Mutex, RwLock};

#[derive(Default)]
struct Tables {
    beds: HashMap<GardenId, Vec<BedRecord>>,
    paths: HashMap<GardenId, Vec<PathRecord>>,
}

/// In-memory garden store backed by hash maps.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    watchers: Mutex<Vec<(GardenId, Sender<Vec<BedRecord>>)>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err(e: impl std::fmt::Display) -> StorageError {
        StorageError::Other(format!("lock error: {}", e))
    }

    /// Push the current bed list to every live watcher of `garden_id`,
    /// pruning watchers whose receiver has been dropped.
    fn notify(&self, garden_id: GardenId) -> StorageResult<()> {
        let beds = {
            let tables = self.tables.read().map_err(Self::lock_err)?;
            tables.beds.get(&garden_id).cloned().unwrap_or_default()
        };
        let mut watchers = self.watchers.lock().map_err(Self::lock_err)?;
        watchers.retain(|(gid, tx)| *gid != garden_id || tx.send(beds.clone()).is_ok());
        Ok(())
    }
}

impl GardenStore for MemoryStore {
    fn create_bed(&self, record: BedRecord) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let garden_id = record.garden_id;
            {
                let mut tables = self.tables.write().map_err(Self::lock_err)?;
                tables.beds.entry(garden_id).or_default().push(record);
            }
            self.notify(garden_id)
        })
    }

    fn update_bed(&self, record: BedRecord) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let garden_id = record.garden_id;
            {
                let mut tables = self.tables.write().map_err(Self::lock_err)?;
                let beds = tables
                    .beds
                    .get_mut(&garden_id)
                    .ok_or_else(|| StorageError::NotFound(garden_id.to_string()))?;
                let existing = beds
                    .iter_mut()
                    .find(|b| b.id == record.id)
                    .ok_or_else(|| StorageError::NotFound(record.id.to_string()))?;
                *existing = record;
            }
            self.notify(garden_id)
        })
    }

    fn delete_bed(&self, garden_id: GardenId, id: BedId) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            {
                let mut tables = self.tables.write().map_err(Self::lock_err)?;
                if let Some(beds) = tables.beds.get_mut(&garden_id) {
                    beds.retain(|b| b.id != id);
                }
            }
            self.notify(garden_id)
        })
    }

    fn create_path(&self, record: PathRecord) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let mut tables = self.tables.write().map_err(Self::lock_err)?;
            tables
                .paths
                .entry(record.garden_id)
                .or_default()
                .push(record);
            Ok(())
        })
    }

    fn delete_path(
        &self,
        garden_id: GardenId,
        id: WalkwayId,
    ) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let mut tables = self.tables.write().map_err(Self::lock_err)?;
            if let Some(paths) = tables.paths.get_mut(&garden_id) {
                paths.retain(|p| p.id != id);
            }
            Ok(())
        })
    }

    fn list_paths(&self, garden_id: GardenId) -> BoxFuture<'_, StorageResult<Vec<PathRecord>>> {
        Box::pin(async move {
            let tables = self.tables.read().map_err(Self::lock_err)?;
            Ok(tables.paths.get(&garden_id).cloned().unwrap_or_default())
        })
    }

    fn observe(&self, garden_id: GardenId) -> BoxFuture<'_, StorageResult<BedSubscription>> {
        Box::pin(async move {
            let beds = {
                let tables = self.tables.read().map_err(Self::lock_err)?;
                tables.beds.get(&garden_id).cloned().unwrap_or_default()
            };
            let (tx, rx) = channel();
            self.watchers
                .lock()
                .map_err(Self::lock_err)?
                .push((garden_id, tx));
            Ok(BedSubscription { beds, updates: rx })
        })
    }
}
