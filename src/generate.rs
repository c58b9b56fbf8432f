//! Randomized generators for the retail datasets.
//!
//! Every generator takes an explicitly passed RNG handle so that runs are
//! reproducible under a fixed seed. Generators are pure functions of the RNG
//! and their inputs; they never fail.

use crate::domain::{Product, Store, StoreProduct, ATTRIBUTE_WORDS, CATEGORIES, STATES};
use rand::Rng;

/// Probability that a catalog flush replaces the requested product count.
const FLUSH_PROBABILITY: f64 = 0.1;

/// Uniform pick from a word pool.
fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate `count` products with contiguous 1-based SKUs.
///
/// When `allow_flush` is set, with probability 1/10 the run generates a
/// drastically reduced catalog instead: a uniform count in `[1, count / 10]`.
/// This simulates an occasional upstream catalog flush. Counts below 10 never
/// flush since the reduced range would be empty.
pub fn generate_products<R: Rng>(rng: &mut R, count: u64, allow_flush: bool) -> Vec<Product> {
    let mut effective = count;
    if allow_flush && count >= 10 && rng.gen_bool(FLUSH_PROBABILITY) {
        effective = rng.gen_range(1..=count / 10);
        tracing::info!(
            "Catalog flush: generating {} of {} requested products",
            effective,
            count
        );
    }

    (1..=effective)
        .map(|sku| Product {
            sku,
            description: format!("Product {sku}"),
            category: pick(rng, CATEGORIES).to_string(),
            rrp: rng.gen_range(10.0..110.0),
            attribute_1: pick(rng, ATTRIBUTE_WORDS).to_string(),
            attribute_2: pick(rng, ATTRIBUTE_WORDS).to_string(),
        })
        .collect()
}

/// Generate exactly `count` stores with 1-based IDs. No flush behavior.
pub fn generate_stores<R: Rng>(rng: &mut R, count: u64) -> Vec<Store> {
    (1..=count)
        .map(|id| Store {
            id,
            name: format!("Store {id}"),
            state: pick(rng, STATES).to_string(),
        })
        .collect()
}

/// Generate `count` store-product associations, sampling store IDs in
/// `[1, store_count]` and product SKUs in `[1, product_count]` uniformly with
/// replacement.
///
/// Both bounds are the *requested* counts: when a flush reduced the generated
/// catalog, associations can still reference SKUs past the end of it.
pub fn generate_store_products<R: Rng>(
    rng: &mut R,
    count: u64,
    store_count: u64,
    product_count: u64,
) -> Vec<StoreProduct> {
    (0..count)
        .map(|_| StoreProduct {
            store_id: rng.gen_range(1..=store_count),
            product_sku: rng.gen_range(1..=product_count),
        })
        .collect()
}
