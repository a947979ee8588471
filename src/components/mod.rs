//! UI Components
//!
//! Leptos components for the inventory editor screen.

mod category_select;
mod item_form;
mod search_bar;
mod csv_download_button;
mod item_table;
mod session_bar;

pub use category_select::CategorySelect;
pub use item_form::ItemForm;
pub use search_bar::SearchBar;
pub use csv_download_button::CsvDownloadButton;
pub use item_table::ItemTable;
pub use session_bar::SessionBar;
