//! CSV export for scraped products.

use crate::store::models::Product;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::path::Path;

/// Writes `products` to a CSV file at `path`, header row first.
///
/// The file is created or truncated, never appended to; an empty product
/// sequence still produces the header row.
pub fn write_products(path: impl AsRef<Path>, products: &[Product]) -> Result<()> {
    let path = path.as_ref();

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(Product::FIELD_NAMES)?;
    for product in products {
        writer.serialize(product)?;
    }

    writer.flush().with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
