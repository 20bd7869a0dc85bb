//! Selectable catalog entries: industries and supply-chain regions.

use serde::{Deserialize, Serialize};

/// A point on the stylized world map, both axes in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    /// Creates a map point, clamping both axes into [0, 100].
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }
}

/// One industry card on step 1.
///
/// The catalog is fixed for the session; only `selected` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySelection {
    /// Stable key, e.g. `"manufacturing"`.
    pub id: String,
    /// Name shown on the card.
    pub display_name: String,
    /// Emoji badge shown on the card.
    pub icon: String,
    /// Whether the visitor picked this industry.
    pub selected: bool,
}

impl IndustrySelection {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon: icon.into(),
            selected: false,
        }
    }
}

/// One region pin on the step 2 map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSelection {
    /// Stable key, e.g. `"north-america"`.
    pub id: String,
    /// Name shown in the selected-region chips.
    pub display_name: String,
    /// Pin position on the map.
    pub map_point: MapPoint,
    /// Whether the visitor picked this region.
    pub selected: bool,
}

impl RegionSelection {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        map_point: MapPoint,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            map_point,
            selected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_point_clamps_both_axes() {
        let p = MapPoint::new(-3.0, 120.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn new_selections_start_unselected() {
        let industry = IndustrySelection::new("tech", "Technology", "💻");
        assert!(!industry.selected);

        let region = RegionSelection::new("europe", "Europe", MapPoint::new(50.0, 25.0));
        assert!(!region.selected);
    }

    #[test]
    fn industry_round_trips_through_json() {
        let industry = IndustrySelection::new("retail", "Retail", "🏪");
        let json = serde_json::to_string(&industry).unwrap();
        let back: IndustrySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(industry, back);
    }
}
