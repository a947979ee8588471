//! Sync Queue
//!
//! Single consumer that pushes editor changes one at a time, in the order
//! they were made, so a delete can never reach the server before its create.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

use inventory_domain::Change;
use super::{push_change, GraphqlClient};

pub type ChangeSender = UnboundedSender<Change>;

/// Destination for queued changes
pub trait ChangeSink {
    async fn push(&self, change: &Change) -> Result<(), String>;
}

impl ChangeSink for GraphqlClient {
    async fn push(&self, change: &Change) -> Result<(), String> {
        push_change(self, change).await
    }
}

/// Drain `rx` until every sender is dropped. A failed push is logged and the
/// queue moves on to the next change.
pub async fn run_sync_queue<S: ChangeSink>(sink: &S, mut rx: UnboundedReceiver<Change>) {
    while let Some(change) = rx.next().await {
        if let Err(e) = sink.push(&change).await {
            log::warn!("remote sync failed for {:?}: {}", change, e);
        }
    }
    log::debug!("sync queue closed");
}
