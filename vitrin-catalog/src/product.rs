use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product grouping with a URL-safe slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Catalog entry. Prices are USD minor units; `sale_price` replaces the list
/// price when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub sale_price: Option<i64>,
    pub stock: u32,
    pub is_active: bool,
    pub is_suggestion: bool,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        stock: u32,
        category_id: Uuid,
    ) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            description: description.into(),
            price,
            sale_price: None,
            stock,
            is_active: stock > 0,
            is_suggestion: false,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Price captured into order lines: the sale price when one is set.
    pub fn effective_price(&self) -> i64 {
        self.sale_price.unwrap_or(self.price)
    }

    pub fn on_sale(&self) -> bool {
        matches!(self.sale_price, Some(sale) if sale < self.price)
    }

    /// Discount relative to the list price, rounded to two decimals. `None`
    /// unless a sale price below list exists.
    pub fn discount_percentage(&self) -> Option<f64> {
        if !self.on_sale() || self.price == 0 {
            return None;
        }
        let sale = self.sale_price?;
        let discount = (self.price - sale) as f64 / self.price as f64 * 100.0;
        Some((discount * 100.0).round() / 100.0)
    }
}

/// Lowercase the name and collapse non-alphanumeric runs into single dashes.
/// Non-ASCII letters are kept so unicode names stay readable.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(price: i64, stock: u32) -> Product {
        Product::new("Hand-woven Rug", "A rug.", price, stock, Uuid::new_v4())
    }

    #[test]
    fn test_slug_generated_from_name() {
        let product = test_product(1000, 5);
        assert_eq!(product.slug, "hand-woven-rug");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Persian   Tea -- Set  "), "persian-tea-set");
        assert_eq!(slugify("فرش دستباف"), "فرش-دستباف");
    }

    #[test]
    fn test_effective_price_prefers_sale() {
        let mut product = test_product(1000, 5);
        assert_eq!(product.effective_price(), 1000);

        product.sale_price = Some(800);
        assert_eq!(product.effective_price(), 800);
    }

    #[test]
    fn test_discount_percentage() {
        let mut product = test_product(1000, 5);
        assert_eq!(product.discount_percentage(), None);

        product.sale_price = Some(750);
        assert_eq!(product.discount_percentage(), Some(25.0));

        // A "sale" above list is not a discount.
        product.sale_price = Some(1200);
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_new_product_with_zero_stock_is_inactive() {
        assert!(!test_product(1000, 0).is_active);
        assert!(test_product(1000, 1).is_active);
    }
}
