//! Editor Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use inventory_domain::Change;
use crate::auth::SharedAuthenticator;
use crate::remote::ChangeSender;
use crate::store::EditorStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct EditorContext {
    /// Editor state
    pub store: EditorStore,
    /// Identity provider chosen by the host
    auth: StoredValue<SharedAuthenticator>,
    /// Feeds the sync queue, None when sync is disabled
    sync_tx: StoredValue<Option<ChangeSender>>,
    /// Name offered for the CSV download
    export_filename: StoredValue<String>,
}

impl EditorContext {
    pub fn new(
        store: EditorStore,
        auth: SharedAuthenticator,
        sync_tx: Option<ChangeSender>,
        export_filename: String,
    ) -> Self {
        Self {
            store,
            auth: StoredValue::new(auth),
            sync_tx: StoredValue::new(sync_tx),
            export_filename: StoredValue::new(export_filename),
        }
    }

    pub fn current_user(&self) -> Option<String> {
        self.auth.with_value(|auth| auth.current_user())
    }

    pub fn export_filename(&self) -> String {
        self.export_filename.get_value()
    }

    pub fn sync_enabled(&self) -> bool {
        self.sync_tx.with_value(Option::is_some)
    }

    /// Queue a local change for the remote mirror
    pub fn sync(&self, change: Change) {
        self.sync_tx.with_value(|tx| {
            let Some(tx) = tx else {
                return;
            };
            if let Err(e) = tx.unbounded_send(change) {
                log::warn!("sync queue closed, dropping change: {:?}", e.into_inner());
            }
        });
    }
}

pub fn use_editor() -> EditorContext {
    expect_context::<EditorContext>()
}
