//! The deal record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::DealId;
use crate::money::{self, Currency, Money};

/// A single promotional offer.
///
/// Deals are values: mutation helpers such as [`Deal::upvoted`] return a new
/// deal and leave the receiver untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Headline shown on the card.
    pub title: String,
    /// Full description; truncated by the presentation layer.
    #[serde(default)]
    pub description: String,
    /// Current price. Zero for free offers.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Price before the offer, when known.
    #[serde(
        default,
        with = "money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Money>,
    /// Image shown on the card.
    #[serde(default)]
    pub image_url: String,
    /// Approval counter.
    #[serde(default)]
    pub upvotes: u32,
    /// Comment counter.
    #[serde(default)]
    pub comments: u32,
    /// Merchant name.
    pub store: String,
    /// Category label.
    pub category: String,
    /// Absolute URL of the external deal page.
    #[serde(default)]
    pub link: String,
    /// Raw end date (`YYYY-MM-DD`). `None` means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Badge flag. Not used for filtering or ordering.
    #[serde(default)]
    pub is_popular: bool,
}

/// Interpretation of a deal's end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndDate {
    /// No end date.
    Ongoing,
    /// A well-formed date.
    On(NaiveDate),
    /// The raw text could not be parsed.
    Invalid(String),
}

impl Deal {
    /// Create a deal with the required fields; everything else is empty.
    pub fn new(
        id: impl Into<DealId>,
        title: impl Into<String>,
        store: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price: Money::from_decimal(price, Currency::default()),
            original_price: None,
            image_url: String::new(),
            upvotes: 0,
            comments: 0,
            store: store.into(),
            category: category.into(),
            link: String::new(),
            end_date: None,
            is_popular: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original: f64) -> Self {
        self.original_price = Some(Money::from_decimal(original, self.price.currency));
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_counts(mut self, upvotes: u32, comments: u32) -> Self {
        self.upvotes = upvotes;
        self.comments = comments;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// A copy of this deal with one more upvote.
    pub fn upvoted(&self) -> Self {
        Self {
            upvotes: self.upvotes.saturating_add(1),
            ..self.clone()
        }
    }

    /// Check if this is a free offer.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Percentage saved against the original price, if there is a real saving.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.percent_off(original))
    }

    /// Parse the raw end date.
    pub fn end_date(&self) -> EndDate {
        match self.end_date.as_deref() {
            None => EndDate::Ongoing,
            Some(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => EndDate::On(date),
                Err(_) => EndDate::Invalid(raw.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa() -> Deal {
        Deal::new("2", "Super Comfy Sofa - 50% Off", "DFS", "Home & Furniture", 299.0)
            .with_original_price(599.0)
            .with_counts(88, 15)
            .with_end_date("2024-07-28")
    }

    #[test]
    fn test_upvoted_is_copy_with_update() {
        let deal = sofa();
        let next = deal.upvoted();

        assert_eq!(deal.upvotes, 88);
        assert_eq!(next.upvotes, 89);
        assert_eq!(Deal { upvotes: 88, ..next }, deal);
    }

    #[test]
    fn test_upvoted_saturates() {
        let deal = sofa().with_counts(u32::MAX, 0);
        assert_eq!(deal.upvoted().upvotes, u32::MAX);
    }

    #[test]
    fn test_end_date_variants() {
        assert_eq!(
            sofa().end_date(),
            EndDate::On(NaiveDate::from_ymd_opt(2024, 7, 28).unwrap())
        );

        let open = Deal::new("x", "Open", "Shop", "Misc", 1.0);
        assert_eq!(open.end_date(), EndDate::Ongoing);

        let broken = open.with_end_date("next tuesday");
        assert_eq!(broken.end_date(), EndDate::Invalid("next tuesday".to_string()));
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(sofa().discount_percent(), Some(50));

        let free = Deal::new("3", "Free Coffee", "Starbucks", "Food & Drink", 0.0);
        assert!(free.is_free());
        assert_eq!(free.discount_percent(), None);

        // Inconsistent pricing is kept but never yields a discount.
        let odd = Deal::new("9", "Odd", "Shop", "Misc", 10.0).with_original_price(5.0);
        assert_eq!(odd.discount_percent(), None);
    }

    #[test]
    fn test_deserialize_reference_shape() {
        let json = r#"{
            "id": "3",
            "title": "Free Coffee at Starbucks",
            "description": "Get a free coffee.",
            "price": 0.0,
            "imageUrl": "https://placehold.co/600x400",
            "upvotes": 210,
            "comments": 55,
            "store": "Starbucks",
            "category": "Food & Drink",
            "link": "https://www.starbucks.co.uk",
            "isPopular": true
        }"#;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.id, DealId::new("3"));
        assert!(deal.is_free());
        assert_eq!(deal.original_price, None);
        assert_eq!(deal.end_date(), EndDate::Ongoing);
        assert!(deal.is_popular);
    }

    #[test]
    fn test_serialize_prices_as_decimals() {
        let value = serde_json::to_value(sofa()).unwrap();
        assert_eq!(value["price"], serde_json::json!(299.0));
        assert_eq!(value["originalPrice"], serde_json::json!(599.0));
        assert_eq!(value["endDate"], serde_json::json!("2024-07-28"));
    }
}
