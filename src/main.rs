//! Command-line interface for retail-datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default volumes and upload to S3
//! AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... retail-datagen
//!
//! # Small deterministic run, files only
//! retail-datagen --product-count 100 --store-count 5 \
//!   --association-count 20 --seed 42 --dry-run
//!
//! # Custom output directory and bucket prefix
//! retail-datagen -o /tmp/retail --bucket-prefix acme-retail
//! ```
//!
//! Credentials are read from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
//! (a `.env` file is honored). `--dry-run` skips the credential check and the
//! upload entirely.

use anyhow::Context;
use clap::Parser;
use retail_datagen::run::GenerateOpts;
use retail_datagen::upload::{self, S3Store, DEFAULT_BUCKET_PREFIX};
use retail_datagen::UploadConfig;

#[derive(Parser)]
#[command(name = "retail-datagen")]
#[command(about = "Generate synthetic retail reference data as CSVs and upload them to S3")]
#[command(long_about = None)]
struct Cli {
    /// Number of products to generate
    #[arg(long, default_value = "10000", value_parser = clap::value_parser!(u64).range(1..))]
    product_count: u64,

    /// Number of stores to generate
    #[arg(long, default_value = "70", value_parser = clap::value_parser!(u64).range(1..))]
    store_count: u64,

    /// Number of store-product associations to generate
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    association_count: u64,

    /// RNG seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the occasional product "flush" that truncates the catalogue
    #[arg(long)]
    no_flush: bool,

    /// Directory to write CSV files into
    #[arg(long, short = 'o', default_value = "data", env = "DATAGEN_OUTPUT_DIR")]
    output_dir: std::path::PathBuf,

    /// Bucket name prefix; the run date is appended
    #[arg(long, default_value = DEFAULT_BUCKET_PREFIX, env = "DATAGEN_BUCKET_PREFIX")]
    bucket_prefix: String,

    /// Generate files only, skip the S3 upload
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Resolve credentials before generating anything so a missing variable
    // fails fast instead of after the files are written.
    let upload_config = if cli.dry_run {
        None
    } else {
        Some(UploadConfig::from_env().context("Upload credentials are not configured")?)
    };

    let opts = GenerateOpts {
        product_count: cli.product_count,
        store_count: cli.store_count,
        association_count: cli.association_count,
        seed: cli.seed,
        allow_flush: !cli.no_flush,
        output_dir: cli.output_dir,
    };
    let files = retail_datagen::generate_files(&opts)?;

    match upload_config {
        Some(config) => {
            let bucket = upload::bucket_name(&cli.bucket_prefix, chrono::Local::now().date_naive());
            let store = S3Store::new(&config).await?;
            let uploaded = upload::upload_to_bucket(&store, &bucket, &files).await?;
            tracing::info!("Uploaded {uploaded} of {} files to {bucket}", files.len());
        }
        None => {
            tracing::info!("Dry run: skipping upload of {} files", files.len());
        }
    }

    Ok(())
}
