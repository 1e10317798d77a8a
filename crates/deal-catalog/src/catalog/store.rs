//! The immutable catalog snapshot.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Deal;
use crate::error::CatalogError;
use crate::ids::DealId;

/// An ordered, immutable collection of deals.
///
/// Insertion order is the display order. A catalog is never edited in place;
/// operations that change a deal return a new catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    deals: Vec<Deal>,
}

impl Catalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_deals(deals: Vec<Deal>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(deals.len());
        for deal in &deals {
            if !seen.insert(deal.id.as_str()) {
                return Err(CatalogError::DuplicateId(deal.id.to_string()));
            }
        }
        Ok(Self { deals })
    }

    /// Parse a JSON array of deals.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let deals: Vec<Deal> = serde_json::from_str(json)?;
        Self::from_deals(deals)
    }

    /// All deals in display order.
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Deal> {
        self.deals.iter()
    }

    /// Look up a deal by id.
    pub fn get(&self, id: &DealId) -> Option<&Deal> {
        self.deals.iter().find(|d| &d.id == id)
    }

    /// Position of a deal in display order.
    pub fn position(&self, id: &DealId) -> Option<usize> {
        self.deals.iter().position(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Build a new catalog with the deal at `index` replaced.
    ///
    /// Ids are untouched by callers, so uniqueness still holds.
    pub(crate) fn replace_at(&self, index: usize, deal: Deal) -> Self {
        let mut deals = self.deals.clone();
        deals[index] = deal;
        Self { deals }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Deal;
    type IntoIter = std::slice::Iter<'a, Deal>;

    fn into_iter(self) -> Self::IntoIter {
        self.deals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_rejected() {
        let deals = vec![
            Deal::new("1", "A", "Shop", "Misc", 1.0),
            Deal::new("2", "B", "Shop", "Misc", 2.0),
            Deal::new("1", "C", "Shop", "Misc", 3.0),
        ];
        assert_eq!(
            Catalog::from_deals(deals),
            Err(CatalogError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_deals(vec![
            Deal::new("a", "A", "Shop", "Misc", 1.0),
            Deal::new("b", "B", "Shop", "Misc", 2.0),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&DealId::new("b")).map(|d| d.title.as_str()), Some("B"));
        assert_eq!(catalog.position(&DealId::new("b")), Some(1));
        assert!(catalog.get(&DealId::new("c")).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "1", "title": "TV", "price": 399.99, "originalPrice": 799.99,
             "store": "Amazon", "category": "Electronics"},
            {"id": "2", "title": "Sofa", "price": 299, "store": "DFS",
             "category": "Home & Furniture", "endDate": "2024-07-28"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.deals()[0].price.amount_minor, 39999);
        assert_eq!(catalog.deals()[1].end_date.as_deref(), Some("2024-07-28"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
