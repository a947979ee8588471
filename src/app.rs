//! Inventory Editor App
//!
//! Root component: wires host config and authenticator into context.

use futures::channel::mpsc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::auth::SharedAuthenticator;
use crate::components::{CsvDownloadButton, ItemForm, ItemTable, SearchBar, SessionBar};
use crate::config::AppConfig;
use crate::context::EditorContext;
use crate::remote::{self, GraphqlClient};
use crate::store::EditorState;

#[component]
pub fn App(config: AppConfig, auth: SharedAuthenticator) -> impl IntoView {
    let store = Store::new(EditorState::new(&config.category_set()));

    // One consumer keeps remote mutations in edit order
    let sync_tx = config.api.as_ref().map(|api| {
        log::info!("remote sync enabled: {} ({})", api.endpoint, api.region);
        let client = GraphqlClient::new(api, auth.clone());
        let (tx, rx) = mpsc::unbounded();
        spawn_local(async move { remote::run_sync_queue(&client, rx).await });
        tx
    });

    // Provide context to all children
    provide_context(EditorContext::new(store, auth, sync_tx, config.export_filename.clone()));

    view! {
        <div class="app-layout">
            <SessionBar />
            <div class="toolbar">
                <ItemForm />
                <SearchBar />
                <CsvDownloadButton />
            </div>
            <ItemTable />
        </div>
    }
}
