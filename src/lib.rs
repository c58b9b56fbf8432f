//! Retail Datagen Library
//!
//! A library for generating synthetic retail reference data as CSV files and
//! shipping them to S3.
//!
//! # Features
//!
//! - Product, store, and store-product association generation from fixed pools
//! - Per-product and per-category pricing offers sampled during CSV writing
//! - Deterministic output under a fixed seed
//! - Timestamped CSV files under a local output directory
//! - Upload into a date-named S3 bucket, created on first use
//!
//! # Library Usage
//!
//! ```no_run
//! use retail_datagen::{generate_files, GenerateOpts};
//!
//! let opts = GenerateOpts {
//!     product_count: 10_000,
//!     store_count: 70,
//!     association_count: 1_000,
//!     seed: Some(42),
//!     allow_flush: true,
//!     output_dir: "data".into(),
//! };
//! let files = generate_files(&opts)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod domain;
pub mod generate;
pub mod offers;
pub mod run;
pub mod upload;
pub mod writer;

pub use config::UploadConfig;
pub use run::{generate_files, GenerateOpts};
pub use upload::{ObjectStore, S3Store};
