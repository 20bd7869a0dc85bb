//! Fixed catalogs backing steps 1 and 2.
//!
//! Six industries and six regions, created once per process. Toggling
//! flips `selected` on copies held by the wizard; the catalogs themselves
//! never change.

use once_cell::sync::Lazy;

use super::selection::{IndustrySelection, MapPoint, RegionSelection};

static INDUSTRIES: Lazy<Vec<IndustrySelection>> = Lazy::new(|| {
    vec![
        IndustrySelection::new("manufacturing", "Manufacturing", "🏭"),
        IndustrySelection::new("retail", "Retail", "🏪"),
        IndustrySelection::new("tech", "Technology", "💻"),
        IndustrySelection::new("food", "Food & Beverage", "🍎"),
        IndustrySelection::new("logistics", "Logistics", "🚚"),
        IndustrySelection::new("healthcare", "Healthcare", "🏥"),
    ]
});

static REGIONS: Lazy<Vec<RegionSelection>> = Lazy::new(|| {
    vec![
        RegionSelection::new("north-america", "North America", MapPoint::new(20.0, 30.0)),
        RegionSelection::new("europe", "Europe", MapPoint::new(50.0, 25.0)),
        RegionSelection::new("asia", "Asia", MapPoint::new(75.0, 35.0)),
        RegionSelection::new("south-america", "South America", MapPoint::new(30.0, 65.0)),
        RegionSelection::new("africa", "Africa", MapPoint::new(55.0, 55.0)),
        RegionSelection::new("oceania", "Oceania", MapPoint::new(85.0, 70.0)),
    ]
});

/// A fresh, all-unselected copy of the industry catalog.
pub fn industry_catalog() -> Vec<IndustrySelection> {
    INDUSTRIES.clone()
}

/// A fresh, all-unselected copy of the region catalog.
pub fn region_catalog() -> Vec<RegionSelection> {
    REGIONS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_catalog_has_six_fixed_entries() {
        let catalog = industry_catalog();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["manufacturing", "retail", "tech", "food", "logistics", "healthcare"]
        );
        assert!(catalog.iter().all(|i| !i.selected));
    }

    #[test]
    fn region_catalog_has_six_fixed_entries() {
        let catalog = region_catalog();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["north-america", "europe", "asia", "south-america", "africa", "oceania"]
        );
        assert!(catalog.iter().all(|r| !r.selected));
    }

    #[test]
    fn catalog_copies_are_independent() {
        let mut first = industry_catalog();
        first[0].selected = true;
        let second = industry_catalog();
        assert!(!second[0].selected);
    }
}
