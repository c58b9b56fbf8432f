//! Retail domain records and the fixed pools they are sampled from.

/// A catalog product. SKUs are 1-based and contiguous within one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: u64,
    pub description: String,
    pub category: String,
    /// Recommended retail price, in [10, 110).
    pub rrp: f64,
    pub attribute_1: String,
    pub attribute_2: String,
}

/// A store location.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: u64,
    pub name: String,
    pub state: String,
}

/// A store stocking a product. Pairs are sampled with replacement and may
/// repeat across records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreProduct {
    pub store_id: u64,
    pub product_sku: u64,
}

/// Australian states and territories used as the store region pool.
pub const STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "NT", "ACT"];

/// Product category pool.
pub const CATEGORIES: &[&str] = &[
    "FOOD",
    "DRINK",
    "CLOTHING",
    "ELECTRONICS",
    "HOME",
    "SPORTS",
    "TOYS",
    "GAMES",
    "BOOKS",
    "MUSIC",
    "MOVIES",
    "GARDEN",
    "HEALTH",
    "BEAUTY",
    "PETS",
    "OTHER",
];

/// Descriptive words sampled (with replacement) for product attributes.
pub const ATTRIBUTE_WORDS: &[&str] = &[
    "GOOD", "BAD", "UGLY", "FAST", "SLOW", "SMALL", "LARGE", "HOT", "COLD", "WET", "DRY", "BRIGHT",
    "DARK", "LOUD", "SOFT", "HARD", "SHINY", "DULL", "BOLD", "MILD", "SWEET", "SOUR", "SALTY",
    "SPICY", "SILKY", "ROUGH", "FLUFFY",
];
