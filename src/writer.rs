//! Generic CSV serialization for the generated datasets.
//!
//! [`write_csv`] is the single serialization path: a destination, an ordered
//! header, a slice of records, and a projection closure turning one record
//! into its row. A projection returning `None` omits that record, which is
//! how the sparse offer files are produced. The per-dataset functions below
//! bind the concrete headers and projections for the five output files.

use crate::domain::{Product, Store, StoreProduct, CATEGORIES};
use crate::offers::{sample_category_offer, sample_product_offer};
use csv::Writer;
use rand::Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

/// Buffer size for CSV writing.
const DEFAULT_BUFFER_SIZE: usize = 8192;

pub const PRODUCTS_HEADER: &[&str] = &[
    "product_sku",
    "product_description",
    "product_category",
    "product_rrp",
    "attribute_1",
    "attribute_2",
];
pub const STORES_HEADER: &[&str] = &["store_id", "store_name", "store_state"];
pub const STORE_PRODUCTS_HEADER: &[&str] = &["store_id", "product_sku"];
pub const PRODUCT_OFFERS_HEADER: &[&str] = &["product_sku", "product_offer_price"];
pub const CATEGORY_OFFERS_HEADER: &[&str] = &["category", "category_offer_discount"];

/// Errors that can occur while writing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Metrics from writing one dataset.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (the header is not counted).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Write `records` to `path` as CSV.
///
/// Creates (or truncates) the file, writes the header row, then one row per
/// record in input order, skipping records whose projection returns `None`.
/// The header is written even when no data rows follow. Failure to create or
/// write the file is an error.
pub fn write_csv<T, F>(
    path: &Path,
    header: &[&str],
    records: &[T],
    mut row: F,
) -> Result<WriteMetrics, WriterError>
where
    F: FnMut(&T) -> Option<Vec<String>>,
{
    let start = Instant::now();
    let mut metrics = WriteMetrics::default();

    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(header)?;

    for record in records {
        if let Some(fields) = row(record) {
            writer.write_record(&fields)?;
            metrics.rows_written += 1;
        }
    }

    writer.flush()?;
    let inner = writer
        .into_inner()
        .map_err(|e| WriterError::Io(std::io::Error::other(e.to_string())))?;
    drop(inner);

    metrics.file_size_bytes = std::fs::metadata(path)?.len();
    metrics.total_duration = start.elapsed();

    Ok(metrics)
}

/// Write the products dataset. One row per product, RRP with two decimals.
pub fn write_products(path: &Path, products: &[Product]) -> Result<WriteMetrics, WriterError> {
    write_csv(path, PRODUCTS_HEADER, products, |product| {
        Some(vec![
            product.sku.to_string(),
            product.description.clone(),
            product.category.clone(),
            format!("{:.2}", product.rrp),
            product.attribute_1.clone(),
            product.attribute_2.clone(),
        ])
    })
}

/// Write the stores dataset. One row per store.
pub fn write_stores(path: &Path, stores: &[Store]) -> Result<WriteMetrics, WriterError> {
    write_csv(path, STORES_HEADER, stores, |store| {
        Some(vec![
            store.id.to_string(),
            store.name.clone(),
            store.state.clone(),
        ])
    })
}

/// Write the store-product associations dataset. One row per association.
pub fn write_store_products(
    path: &Path,
    associations: &[StoreProduct],
) -> Result<WriteMetrics, WriterError> {
    write_csv(path, STORE_PRODUCTS_HEADER, associations, |association| {
        Some(vec![
            association.store_id.to_string(),
            association.product_sku.to_string(),
        ])
    })
}

/// Write the sparse product offers dataset: a row for roughly a third of the
/// products, sampled through the projection.
pub fn write_product_offers<R: Rng>(
    path: &Path,
    products: &[Product],
    rng: &mut R,
) -> Result<WriteMetrics, WriterError> {
    write_csv(path, PRODUCT_OFFERS_HEADER, products, |product| {
        sample_product_offer(rng, product).map(|offer| {
            vec![
                offer.product_sku.to_string(),
                format!("{:.2}", offer.offer_price),
            ]
        })
    })
}

/// Write the sparse category offers dataset over the fixed category pool.
pub fn write_category_offers<R: Rng>(path: &Path, rng: &mut R) -> Result<WriteMetrics, WriterError> {
    write_csv(path, CATEGORY_OFFERS_HEADER, CATEGORIES, |category| {
        sample_category_offer(rng, category)
            .map(|offer| vec![offer.category, format!("{:.2}", offer.discount)])
    })
}
