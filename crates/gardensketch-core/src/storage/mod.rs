//! Storage abstraction: the persistence bridge consumed by the editor.
//!
//! The editor's in-memory state is the source of truth for immediate
//! feedback; the durable store is eventually consistent with it. All calls
//! are asynchronous and fire-and-forget relative to the interaction thread.

mod memory;
mod queue;
mod records;

pub use memory::MemoryStore;
pub use queue::{WriteOp, WriteQueue};
pub use records::{BedRecord, PathRecord, PlantRecord, ShapeRecord};

use crate::shapes::{BedId, GardenId, WalkwayId};
use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc::Receiver;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A reactive view of one garden's beds.
///
/// Carries the bed list as of subscription time plus a channel that
/// delivers the full current list after every subsequent write.
pub struct BedSubscription {
    pub beds: Vec<BedRecord>,
    pub updates: Receiver<Vec<BedRecord>>,
}

/// Durable record store for garden content, keyed by garden id.
///
/// Backends are expected to provide last-write-wins semantics; the editor
/// does not serialize overlapping writes for the same bed.
pub trait GardenStore: Send + Sync {
    /// Persist a new bed record.
    fn create_bed(&self, record: BedRecord) -> BoxFuture<'_, StorageResult<()>>;

    /// Overwrite an existing bed record.
    fn update_bed(&self, record: BedRecord) -> BoxFuture<'_, StorageResult<()>>;

    /// Delete a bed record.
    fn delete_bed(&self, garden_id: GardenId, id: BedId) -> BoxFuture<'_, StorageResult<()>>;

    /// Persist a new walkway record.
    fn create_path(&self, record: PathRecord) -> BoxFuture<'_, StorageResult<()>>;

    /// Delete a walkway record.
    fn delete_path(&self, garden_id: GardenId, id: WalkwayId)
        -> BoxFuture<'_, StorageResult<()>>;

    /// Load all walkway records for a garden.
    fn list_paths(&self, garden_id: GardenId) -> BoxFuture<'_, StorageResult<Vec<PathRecord>>>;

    /// Subscribe to a garden's bed list.
    fn observe(&self, garden_id: GardenId) -> BoxFuture<'_, StorageResult<BedSubscription>>;
}
