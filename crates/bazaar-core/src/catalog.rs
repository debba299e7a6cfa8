//! # Catalog Query Engine
//!
//! Given the product catalog and a filter specification, produces the
//! matching subset, its sort order, and facet summaries.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      How a Search Runs                                  │
//! │                                                                         │
//! │  Full catalog                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. text query ──► 2. category ──► 3. brands ──► 4. price range        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. min rating ──► 6. in stock ──► 7. stable sort                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchResults { products, total, facets }                             │
//! │                                                                         │
//! │  Facets are ALWAYS computed over the full catalog, never the filtered  │
//! │  set, so filter UI affordances reflect total availability.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage narrows the candidate set produced by the previous stage; the
//! order above is fixed. An empty result is a valid, non-error outcome.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductCategory};

// =============================================================================
// Catalog Constants
// =============================================================================

/// A product is "featured" at or above this rating.
pub const FEATURED_MIN_RATING: f64 = 4.5;

/// How many featured products the home page shows.
pub const FEATURED_LIMIT: usize = 4;

/// Default page size for catalog listings.
pub const DEFAULT_PAGE_SIZE: usize = 12;

// =============================================================================
// Search Filters
// =============================================================================

/// Which product field a search sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortKey {
    /// Lexicographic by product name.
    Name,
    /// Numeric by price in cents.
    Price,
    /// Numeric by average rating.
    Rating,
    /// By creation timestamp.
    Newest,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// An inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Creates a range from inclusive bounds.
    pub const fn new(min: Money, max: Money) -> Self {
        PriceRange { min, max }
    }

    /// Checks `min <= price <= max`, both bounds inclusive.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// A search/filter specification.
///
/// Every field is optional; absence means "no constraint". The default
/// value filters nothing and sorts nothing, returning the catalog as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchFilters {
    /// Free-text query, matched case-insensitively as a substring of the
    /// product name, description, or any tag. Empty means no constraint.
    pub query: Option<String>,

    /// Category name, compared case-insensitively for equality.
    pub category: Option<String>,

    /// Brand names; a product matches when its brand is in the list. An
    /// empty list means no constraint.
    pub brands: Vec<String>,

    /// Inclusive price window.
    pub price_range: Option<PriceRange>,

    /// Keep products rated at or above this threshold.
    pub min_rating: Option<f64>,

    /// Keep only purchasable products.
    pub in_stock_only: bool,

    /// Sort key; `None` keeps catalog order.
    pub sort_by: Option<SortKey>,

    /// Sort direction, ascending by default.
    pub sort_order: SortOrder,
}

// =============================================================================
// Facets & Results
// =============================================================================

/// How many catalog products carry a given category or brand name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// Aggregates describing the FULL catalog, used to populate filter UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogFacets {
    /// Per-category product counts, in the catalog's category order.
    pub categories: Vec<FacetCount>,

    /// Per-brand product counts, in first-seen catalog order.
    pub brands: Vec<FacetCount>,

    /// Catalog-wide minimum and maximum price.
    pub price_range: PriceRange,
}

/// The outcome of a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchResults {
    /// Matching products, filtered and sorted.
    pub products: Vec<Product>,

    /// Number of matching products.
    pub total: usize,

    /// Aggregates over the full catalog (not the filtered set).
    pub facets: CatalogFacets,
}

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog: a read-only set of products and categories supplied
/// by the backend, plus the query operations the storefront runs over it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<ProductCategory>,
}

impl Catalog {
    /// Creates a catalog from its products and known categories.
    pub fn new(products: Vec<Product>, categories: Vec<ProductCategory>) -> Self {
        Catalog {
            products,
            categories,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All known categories.
    pub fn categories(&self) -> &[ProductCategory] {
        &self.categories
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a category by its URL slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&ProductCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Products in the named category, compared case-insensitively.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// The home page's featured picks: the first four products rated 4.5
    /// or higher, in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.rating >= FEATURED_MIN_RATING)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// A 1-based page of the catalog plus the catalog-wide total.
    ///
    /// Pages past the end are empty, not an error.
    pub fn page(&self, page: usize, per_page: usize) -> (Vec<&Product>, usize) {
        let start = page.saturating_sub(1) * per_page;
        let slice = self
            .products
            .iter()
            .skip(start)
            .take(per_page)
            .collect();
        (slice, self.products.len())
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Runs a search: staged filters in fixed order, then a stable sort,
    /// plus facets over the full catalog.
    pub fn search(&self, filters: &SearchFilters) -> SearchResults {
        let mut matches: Vec<&Product> = self.products.iter().collect();

        // 1. Free-text query over name, description, and tags
        if let Some(needle) = normalized_query(filters.query.as_deref()) {
            matches.retain(|p| matches_text(p, &needle));
        }

        // 2. Category equality
        if let Some(category) = filters.category.as_deref() {
            matches.retain(|p| p.category.eq_ignore_ascii_case(category));
        }

        // 3. Brand membership
        if !filters.brands.is_empty() {
            matches.retain(|p| filters.brands.iter().any(|b| b == &p.brand));
        }

        // 4. Inclusive price window
        if let Some(range) = filters.price_range {
            matches.retain(|p| range.contains(p.price()));
        }

        // 5. Minimum rating
        if let Some(min_rating) = filters.min_rating {
            matches.retain(|p| p.rating >= min_rating);
        }

        // 6. In-stock flag
        if filters.in_stock_only {
            matches.retain(|p| p.in_stock);
        }

        // 7. Sort. `sort_by` is stable: equal keys keep their prior
        //    relative order, so ties preserve catalog order.
        if let Some(key) = filters.sort_by {
            matches.sort_by(|a, b| {
                let ordering = match key {
                    SortKey::Name => a.name.cmp(&b.name),
                    SortKey::Price => a.price_cents.cmp(&b.price_cents),
                    SortKey::Rating => a.rating.total_cmp(&b.rating),
                    SortKey::Newest => a.created_at.cmp(&b.created_at),
                };
                match filters.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let products: Vec<Product> = matches.into_iter().cloned().collect();
        SearchResults {
            total: products.len(),
            facets: self.facets(),
            products,
        }
    }

    /// Facet summaries over the FULL catalog.
    ///
    /// Category counts use exact name equality against the known category
    /// list; brand counts are gathered in first-seen catalog order. The
    /// price range spans the whole catalog, `(0, 0)` when it is empty.
    pub fn facets(&self) -> CatalogFacets {
        let categories = self
            .categories
            .iter()
            .map(|c| FacetCount {
                name: c.name.clone(),
                count: self.products.iter().filter(|p| p.category == c.name).count(),
            })
            .collect();

        let mut brands: Vec<FacetCount> = Vec::new();
        for product in &self.products {
            match brands.iter_mut().find(|f| f.name == product.brand) {
                Some(facet) => facet.count += 1,
                None => brands.push(FacetCount {
                    name: product.brand.clone(),
                    count: 1,
                }),
            }
        }

        let price_range = PriceRange {
            min: self
                .products
                .iter()
                .map(Product::price)
                .min()
                .unwrap_or(Money::zero()),
            max: self
                .products
                .iter()
                .map(Product::price)
                .max()
                .unwrap_or(Money::zero()),
        };

        CatalogFacets {
            categories,
            brands,
            price_range,
        }
    }
}

// =============================================================================
// Text Matching
// =============================================================================

/// Lowercases a query for matching; `None` when absent or blank, because an
/// empty query means "no constraint", never "match nothing".
fn normalized_query(query: Option<&str>) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match over name, description, and tags.
fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn test_product(
        id: &str,
        name: &str,
        category: &str,
        brand: &str,
        price_cents: i64,
        rating: f64,
        age_days: i64,
    ) -> Product {
        let created = Utc::now() - Duration::days(age_days);
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} by {}", name, brand),
            price_cents,
            original_price_cents: None,
            images: vec![],
            category: category.to_string(),
            brand: brand.to_string(),
            rating,
            review_count: 10,
            in_stock: true,
            stock_quantity: 10,
            tags: vec![name.split(' ').next().unwrap().to_lowercase()],
            features: vec![],
            specifications: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn test_category(id: &str, name: &str, slug: &str) -> ProductCategory {
        ProductCategory {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            image: None,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(
            vec![
                test_product("1", "Trail Backpack", "Outdoors", "Northway", 8999, 4.6, 30),
                test_product("2", "Camp Stove", "Outdoors", "Emberline", 4599, 4.2, 10),
                test_product("3", "Espresso Grinder", "Kitchen", "BrewMaster", 12999, 4.8, 5),
                test_product("4", "Chef Knife", "Kitchen", "Northway", 8999, 4.4, 60),
            ],
            vec![
                test_category("c1", "Outdoors", "outdoors"),
                test_category("c2", "Kitchen", "kitchen"),
            ],
        )
    }

    #[test]
    fn test_unconstrained_search_returns_catalog_order() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters::default());

        assert_eq!(results.total, 4);
        let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_text_query_matches_name_description_and_tags() {
        let catalog = test_catalog();

        // Name, any case
        let results = catalog.search(&SearchFilters {
            query: Some("TRAIL".to_string()),
            ..Default::default()
        });
        assert_eq!(results.total, 1);
        assert_eq!(results.products[0].id, "1");

        // Description carries the brand
        let results = catalog.search(&SearchFilters {
            query: Some("emberline".to_string()),
            ..Default::default()
        });
        assert_eq!(results.total, 1);

        // Tag
        let results = catalog.search(&SearchFilters {
            query: Some("espresso".to_string()),
            ..Default::default()
        });
        assert_eq!(results.total, 1);
        assert_eq!(results.products[0].id, "3");
    }

    #[test]
    fn test_blank_query_is_no_constraint() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            query: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(results.total, 4);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            category: Some("kitchen".to_string()),
            ..Default::default()
        });

        assert_eq!(results.total, 2);
        assert!(results.products.iter().all(|p| p.category == "Kitchen"));
    }

    #[test]
    fn test_brand_filter_is_membership() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            brands: vec!["Northway".to_string(), "Emberline".to_string()],
            ..Default::default()
        });

        let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            price_range: Some(PriceRange::new(
                Money::from_cents(4599),
                Money::from_cents(8999),
            )),
            ..Default::default()
        });

        let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[test]
    fn test_min_rating_filter() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            min_rating: Some(4.5),
            ..Default::default()
        });

        let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_in_stock_filter() {
        let mut products = test_catalog().products().to_vec();
        products[1].in_stock = false;
        let catalog = Catalog::new(products, vec![]);

        let results = catalog.search(&SearchFilters {
            in_stock_only: true,
            ..Default::default()
        });
        assert_eq!(results.total, 3);
    }

    #[test]
    fn test_filters_chain_in_order() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            category: Some("Kitchen".to_string()),
            brands: vec!["Northway".to_string()],
            ..Default::default()
        });

        assert_eq!(results.total, 1);
        assert_eq!(results.products[0].id, "4");
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let catalog = test_catalog();

        let asc = catalog.search(&SearchFilters {
            sort_by: Some(SortKey::Price),
            ..Default::default()
        });
        let prices: Vec<i64> = asc.products.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, [4599, 8999, 8999, 12999]);

        let desc = catalog.search(&SearchFilters {
            sort_by: Some(SortKey::Price),
            sort_order: SortOrder::Desc,
            ..Default::default()
        });
        let prices: Vec<i64> = desc.products.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, [12999, 8999, 8999, 4599]);
    }

    #[test]
    fn test_sort_ties_keep_catalog_order() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            sort_by: Some(SortKey::Price),
            ..Default::default()
        });

        // Products 1 and 4 share a price; 1 precedes 4 in the catalog and
        // must still precede it after the sort.
        let tied: Vec<&str> = results
            .products
            .iter()
            .filter(|p| p.price_cents == 8999)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(tied, ["1", "4"]);
    }

    #[test]
    fn test_sort_by_newest() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            sort_by: Some(SortKey::Newest),
            sort_order: SortOrder::Desc,
            ..Default::default()
        });

        // Most recently created first
        let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1", "4"]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            query: Some("no such product".to_string()),
            ..Default::default()
        });

        assert_eq!(results.total, 0);
        assert!(results.products.is_empty());
        // Facets still describe the full catalog
        assert_eq!(results.facets.categories[0].count, 2);
    }

    #[test]
    fn test_facets_ignore_active_filters() {
        let catalog = test_catalog();
        let results = catalog.search(&SearchFilters {
            category: Some("Kitchen".to_string()),
            ..Default::default()
        });

        assert_eq!(results.total, 2);
        let outdoors = results
            .facets
            .categories
            .iter()
            .find(|f| f.name == "Outdoors")
            .unwrap();
        assert_eq!(outdoors.count, 2);

        // Brands in first-seen order, counted over the full catalog
        let brand_names: Vec<&str> = results
            .facets
            .brands
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(brand_names, ["Northway", "Emberline", "BrewMaster"]);
        assert_eq!(results.facets.brands[0].count, 2);

        assert_eq!(
            results.facets.price_range,
            PriceRange::new(Money::from_cents(4599), Money::from_cents(12999))
        );
    }

    #[test]
    fn test_empty_catalog_facets() {
        let catalog = Catalog::new(vec![], vec![]);
        let facets = catalog.facets();

        assert!(facets.categories.is_empty());
        assert!(facets.brands.is_empty());
        assert_eq!(facets.price_range, PriceRange::new(Money::zero(), Money::zero()));
    }

    #[test]
    fn test_featured_picks() {
        let catalog = test_catalog();
        let featured: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, ["1", "3"]);
    }

    #[test]
    fn test_paging() {
        let catalog = test_catalog();

        let (first, total) = catalog.page(1, 3);
        assert_eq!(total, 4);
        assert_eq!(first.len(), 3);

        let (second, _) = catalog.page(2, 3);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, "4");

        let (past_end, _) = catalog.page(5, 3);
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = test_catalog();

        assert!(catalog.product_by_id("3").is_some());
        assert!(catalog.product_by_id("nope").is_none());

        assert_eq!(catalog.category_by_slug("kitchen").unwrap().name, "Kitchen");
        assert_eq!(catalog.products_by_category("OUTDOORS").len(), 2);
    }
}
