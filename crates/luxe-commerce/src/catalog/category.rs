//! Category, testimonial and review metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId, ReviewId, TestimonialId};

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name; products reference categories by this name.
    pub name: String,
    pub image: String,
    /// Advertised item count shown on category tiles.
    ///
    /// Marketing copy, not derived from the catalog; see
    /// `Catalog::category_counts` for the real number.
    pub count: u32,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        image: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            count,
        }
    }
}

/// A customer quote shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub image: String,
}

/// A product review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Rendered star bar, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    }
}
