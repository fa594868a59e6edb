//! Fire-and-forget write queue between the editor and the durable store.
//!
//! Editor interactions enqueue writes synchronously and move on; the host
//! drains the queue with [`WriteQueue::flush`] on its async executor. A
//! failed write is logged and dropped, the in-memory document stays as the
//! user left it.

use super::{BedRecord, GardenStore, PathRecord};
use crate::shapes::{BedId, GardenId, WalkwayId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One pending storage write.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    CreateBed(BedRecord),
    UpdateBed(BedRecord),
    DeleteBed { garden_id: GardenId, id: BedId },
    CreatePath(PathRecord),
    DeletePath { garden_id: GardenId, id: WalkwayId },
}

/// Ordered queue of pending writes against a [`GardenStore`].
pub struct WriteQueue {
    store: Arc<dyn GardenStore>,
    pending: Mutex<VecDeque<WriteOp>>,
}

impl WriteQueue {
    pub fn new(store: Arc<dyn GardenStore>) -> Self {
        Self {
            store,
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a write for the next flush. Never blocks on storage.
    pub fn enqueue(&self, op: WriteOp) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push_back(op),
            Err(e) => log::error!("write queue poisoned, dropping write: {}", e),
        }
    }

    /// Number of writes waiting to be flushed.
    pub fn pending_len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Drain the queue in order, applying each write to the store.
    ///
    /// Failures are logged and skipped so one bad record cannot wedge the
    /// queue. The lock is never held across an await point.
    pub async fn flush(&self) {
        loop {
            let op = match self.pending.lock() {
                Ok(mut pending) => pending.pop_front(),
                Err(e) => {
                    log::error!("write queue poisoned during flush: {}", e);
                    return;
                }
            };
            let Some(op) = op else {
                return;
            };

            let result = match op {
                WriteOp::CreateBed(record) => self.store.create_bed(record).await,
                WriteOp::UpdateBed(record) => self.store.update_bed(record).await,
                WriteOp::DeleteBed { garden_id, id } => {
                    self.store.delete_bed(garden_id, id).await
                }
                WriteOp::CreatePath(record) => self.store.create_path(record).await,
                WriteOp::DeletePath { garden_id, id } => {
                    self.store.delete_path(garden_id, id).await
                }
            };

            if let Err(e) = result {
                log::warn!("storage write failed: {}", e);
            }
        }
    }
}
