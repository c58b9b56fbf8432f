//! One generation pass: produce the five datasets and write them to
//! timestamped CSV files under the output directory.

use crate::generate::{generate_products, generate_store_products, generate_stores};
use crate::writer::{
    write_category_offers, write_product_offers, write_products, write_store_products,
    write_stores, WriteMetrics,
};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for one generation pass.
#[derive(Debug, Clone)]
pub struct GenerateOpts {
    pub product_count: u64,
    pub store_count: u64,
    pub association_count: u64,
    /// Fixed seed for reproducible output; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Whether the rare catalog flush event may trigger.
    pub allow_flush: bool,
    pub output_dir: PathBuf,
}

/// Generate all five datasets and write them under the output directory.
///
/// Returns the written paths in generation order: products, stores,
/// store_products, product_offers, category_offers. All filenames share one
/// timestamp taken at the start of the pass.
pub fn generate_files(opts: &GenerateOpts) -> Result<Vec<PathBuf>> {
    let mut rng = match opts.seed {
        Some(seed) => {
            info!("Generating with fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    std::fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", opts.output_dir))?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H:%M:%S").to_string();

    info!(
        "Generating {} products, {} stores, {} associations",
        opts.product_count, opts.store_count, opts.association_count
    );

    let products = generate_products(&mut rng, opts.product_count, opts.allow_flush);
    let stores = generate_stores(&mut rng, opts.store_count);
    // Associations sample the requested product count, not the possibly
    // flush-reduced catalog.
    let associations = generate_store_products(
        &mut rng,
        opts.association_count,
        opts.store_count,
        opts.product_count,
    );

    let mut files = Vec::with_capacity(5);

    let path = dataset_path(&opts.output_dir, "products", &timestamp);
    let metrics = write_products(&path, &products)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_write(&path, &metrics);
    files.push(path);

    let path = dataset_path(&opts.output_dir, "stores", &timestamp);
    let metrics = write_stores(&path, &stores)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_write(&path, &metrics);
    files.push(path);

    let path = dataset_path(&opts.output_dir, "store_products", &timestamp);
    let metrics = write_store_products(&path, &associations)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_write(&path, &metrics);
    files.push(path);

    let path = dataset_path(&opts.output_dir, "product_offers", &timestamp);
    let metrics = write_product_offers(&path, &products, &mut rng)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_write(&path, &metrics);
    files.push(path);

    let path = dataset_path(&opts.output_dir, "category_offers", &timestamp);
    let metrics = write_category_offers(&path, &mut rng)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_write(&path, &metrics);
    files.push(path);

    Ok(files)
}

fn dataset_path(dir: &Path, dataset: &str, timestamp: &str) -> PathBuf {
    dir.join(format!("{dataset}_{timestamp}.csv"))
}

fn log_write(path: &Path, metrics: &WriteMetrics) {
    info!(
        "Wrote {:?}: {} rows in {:?} ({} bytes)",
        path, metrics.rows_written, metrics.total_duration, metrics.file_size_bytes
    );
}
