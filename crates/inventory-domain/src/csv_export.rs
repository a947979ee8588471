//! CSV Export
//!
//! Serializes the filtered view to `Product Name,Price,Category` rows.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::item::Item;

pub const CSV_HEADER: [&str; 3] = ["Product Name", "Price", "Category"];

pub const DEFAULT_EXPORT_FILENAME: &str = "product_data.csv";

/// Render items as CSV text, header first, one `\n`-terminated row per item.
///
/// Fields are only quoted when they contain a delimiter, quote or newline.
pub fn export_csv<'a, I>(items: I) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    let mut rows = 0usize;
    for item in items {
        writer.write_record([item.name.as_str(), item.price.as_str(), item.category.as_str()])?;
        rows += 1;
    }
    log::trace!("exported {} csv rows", rows);

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // Input is all &str, so the output is valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
