//! Offer synthesizers.
//!
//! Offers are derived rows, not stored entities: each sampler decides
//! independently per record whether an offer exists at all, and returns
//! `None` when it does not. The CSV writer skips `None` projections, which is
//! what makes the offer files sparse.

use crate::domain::Product;
use rand::Rng;

/// Probability that a product carries a discounted price.
const PRODUCT_OFFER_RATE: f64 = 1.0 / 3.0;

/// Probability that a category carries a discount.
const CATEGORY_OFFER_RATE: f64 = 0.5;

/// Upper bound (exclusive) on a category discount fraction.
const MAX_CATEGORY_DISCOUNT: f64 = 0.2;

/// A discounted price for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOffer {
    pub product_sku: u64,
    /// In [0, RRP).
    pub offer_price: f64,
}

/// A discount fraction applied to a whole category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOffer {
    pub category: String,
    /// In [0, 0.2).
    pub discount: f64,
}

/// With probability 1/3, price the product at a random fraction of its RRP.
pub fn sample_product_offer<R: Rng>(rng: &mut R, product: &Product) -> Option<ProductOffer> {
    if rng.gen_bool(PRODUCT_OFFER_RATE) {
        Some(ProductOffer {
            product_sku: product.sku,
            offer_price: rng.gen::<f64>() * product.rrp,
        })
    } else {
        None
    }
}

/// With probability 1/2, grant the category a discount in [0, 0.2).
pub fn sample_category_offer<R: Rng>(rng: &mut R, category: &str) -> Option<CategoryOffer> {
    if rng.gen_bool(CATEGORY_OFFER_RATE) {
        Some(CategoryOffer {
            category: category.to_string(),
            discount: rng.gen::<f64>() * MAX_CATEGORY_DISCOUNT,
        })
    } else {
        None
    }
}
