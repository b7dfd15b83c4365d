use serde::{Deserialize, Serialize};

use crate::coords::round_coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Gourmet,
    Event,
    Scenery,
    Shop,
    Emergency,
}

impl Genre {
    /// Marker color for this genre.
    pub fn color(&self) -> &'static str {
        match self {
            Genre::Gourmet => "#EF4444",
            Genre::Event => "#F59E0B",
            Genre::Scenery => "#10B981",
            Genre::Shop => "#3B82F6",
            Genre::Emergency => "#8B5CF6",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Gourmet => write!(f, "Gourmet"),
            Genre::Event => write!(f, "Event"),
            Genre::Scenery => write!(f, "Scenery"),
            Genre::Shop => write!(f, "Shop"),
            Genre::Emergency => write!(f, "Emergency"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    General,
    Business,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::General => write!(f, "General"),
            UserRole::Business => write!(f, "Business"),
        }
    }
}

/// A geo-tagged post as supplied by the view layer.
///
/// Everything except `id`, `latitude` and `longitude` is pass-through
/// display metadata; the engine never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub genre: Genre,
    pub reactions: u32,
    pub user_role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_icon: Option<String>,
}

/// A latitude/longitude pair. Geographic range validity is the caller's
/// concern; the engine only guarantees precision after `normalized`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both fields rounded to the engine-wide 4-decimal precision.
    pub fn normalized(self) -> Self {
        Self {
            latitude: round_coord(self.latitude),
            longitude: round_coord(self.longitude),
        }
    }
}

/// A marker position as percentages (0–100) of the containing rectangle.
///
/// Not clamped: coordinates outside the configured map bounds project to
/// percentages outside [0, 100] and the view clips them visually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// Visual size bucket for a cluster marker. The rendering layer picks
/// concrete pixel dimensions per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerScale {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl MarkerScale {
    /// Bucket for a cluster of `count` pins: 1 → small, 2–3 → medium,
    /// 4–5 → large, 6+ → extra-large.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => MarkerScale::Small,
            2 | 3 => MarkerScale::Medium,
            4 | 5 => MarkerScale::Large,
            _ => MarkerScale::ExtraLarge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_colors_are_distinct() {
        let colors = [
            Genre::Gourmet.color(),
            Genre::Event.color(),
            Genre::Scenery.color(),
            Genre::Shop.color(),
            Genre::Emergency.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_marker_scale_buckets() {
        assert_eq!(MarkerScale::for_count(1), MarkerScale::Small);
        assert_eq!(MarkerScale::for_count(2), MarkerScale::Medium);
        assert_eq!(MarkerScale::for_count(3), MarkerScale::Medium);
        assert_eq!(MarkerScale::for_count(4), MarkerScale::Large);
        assert_eq!(MarkerScale::for_count(5), MarkerScale::Large);
        assert_eq!(MarkerScale::for_count(6), MarkerScale::ExtraLarge);
        assert_eq!(MarkerScale::for_count(42), MarkerScale::ExtraLarge);
    }

    #[test]
    fn test_normalized_rounds_both_axes() {
        let coord = GeoCoordinate::new(33.60711049, 133.68225051).normalized();
        assert!((coord.latitude - 33.6071).abs() < 1e-9);
        assert!((coord.longitude - 133.6823).abs() < 1e-9);
    }

    #[test]
    fn test_pin_parses_camel_case_json() {
        let json = r#"{
            "id": "pin-1",
            "title": "Morning market",
            "latitude": 33.6071104,
            "longitude": 133.6822505,
            "genre": "gourmet",
            "reactions": 12,
            "userRole": "business",
            "businessName": "Hirome Ichiba"
        }"#;
        let pin: Pin = serde_json::from_str(json).unwrap();
        assert_eq!(pin.id, "pin-1");
        assert_eq!(pin.genre, Genre::Gourmet);
        assert_eq!(pin.user_role, UserRole::Business);
        assert_eq!(pin.business_name.as_deref(), Some("Hirome Ichiba"));
        assert!(pin.business_icon.is_none());
    }

    #[test]
    fn test_pin_serializes_camel_case() {
        let pin = Pin {
            id: "p".to_string(),
            title: "t".to_string(),
            latitude: 33.6,
            longitude: 133.7,
            genre: Genre::Scenery,
            reactions: 0,
            user_role: UserRole::General,
            business_name: None,
            business_icon: None,
        };
        let json = serde_json::to_string(&pin).unwrap();
        assert!(json.contains("\"userRole\":\"general\""));
        assert!(!json.contains("businessName"));
    }
}
