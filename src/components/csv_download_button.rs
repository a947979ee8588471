//! CSV Download Button Component
//!
//! Exports the currently filtered rows.

use leptos::prelude::*;

use crate::context::use_editor;
use crate::download::{download_text, CSV_MIME};
use crate::store::store_export_csv;

#[component]
pub fn CsvDownloadButton() -> impl IntoView {
    let ctx = use_editor();

    let on_click = move |_: web_sys::MouseEvent| {
        let Some(csv) = store_export_csv(&ctx.store) else {
            return;
        };
        let filename = ctx.export_filename();
        match download_text(&csv, &filename, CSV_MIME) {
            Ok(()) => log::info!("downloaded {}", filename),
            Err(e) => log::error!("download of {} failed: {}", filename, e),
        }
    };

    view! {
        <button type="button" class="btn btn-primary" on:click=on_click>
            "Download CSV"
        </button>
    }
}
