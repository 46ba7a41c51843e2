//! Product records.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Selectable variant options for a product.
///
/// Each list is either absent or non-empty; the first entry is the
/// pre-selected choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

impl ProductVariants {
    pub fn is_empty(&self) -> bool {
        self.colors.is_none() && self.sizes.is_none()
    }

    pub fn colors(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }

    pub fn sizes(&self) -> &[String] {
        self.sizes.as_deref().unwrap_or_default()
    }
}

/// A named specification row (e.g. "Movement: Quartz").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A product in the catalog.
///
/// Optional flags (`featured`, `is_new`) default to `false`; `images` and
/// `specifications` default to empty. Products are built once when the
/// catalog is assembled and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price; at least `price` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default)]
    pub variants: ProductVariants,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "new")]
    pub is_new: bool,
}

impl Product {
    /// Create an in-stock product with no optional attributes.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            specifications: Vec::new(),
            variants: ProductVariants::default(),
            in_stock: true,
            stock_count: None,
            featured: false,
            is_new: false,
        }
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stock(mut self, in_stock: bool, stock_count: Option<u32>) -> Self {
        self.in_stock = in_stock;
        self.stock_count = stock_count;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Check if the original price is strictly above the selling price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Whole-number discount off the original price, 0 when not discounted.
    pub fn discount_percentage(&self) -> u32 {
        match self.original_price {
            Some(op) if op.amount_cents > 0 && op.amount_cents > self.price.amount_cents => {
                let savings = (op.amount_cents - self.price.amount_cents) as f64;
                ((savings / op.amount_cents as f64) * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|_| self.is_on_sale())
            .and_then(|op| op.try_subtract(&self.price))
    }

    /// Gallery images, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            if self.image.is_empty() {
                Vec::new()
            } else {
                vec![self.image.as_str()]
            }
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Color pre-selected on a product page.
    pub fn default_color(&self) -> Option<&str> {
        self.variants.colors().first().map(String::as_str)
    }

    /// Size pre-selected on a product page.
    pub fn default_size(&self) -> Option<&str> {
        self.variants.sizes().first().map(String::as_str)
    }

    pub fn offers_color(&self, color: &str) -> bool {
        self.variants.colors().iter().any(|c| c == color)
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.variants.sizes().iter().any(|s| s == size)
    }

    /// Check the record against the catalog invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !self.price.is_positive() {
            return Err(invalid("price must be positive"));
        }
        if let Some(op) = self.original_price {
            if op.currency != self.price.currency {
                return Err(invalid("original price currency differs from price"));
            }
            if op.amount_cents < self.price.amount_cents {
                return Err(invalid("original price is below price"));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid("rating must be within 0-5"));
        }
        if matches!(&self.variants.colors, Some(c) if c.is_empty()) {
            return Err(invalid("color list is present but empty"));
        }
        if matches!(&self.variants.sizes, Some(s) if s.is_empty()) {
            return Err(invalid("size list is present but empty"));
        }
        Ok(())
    }
}
