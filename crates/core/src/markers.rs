//! Render-pass composition: cluster the current pin snapshot and project
//! each cluster's representative into screen space.

use crate::cluster::{cluster_pins, PinCluster};
use crate::models::{GeoCoordinate, Pin, ScreenPosition};
use crate::projection::BoundsProjector;

/// One visual marker: a cluster plus where to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cluster: PinCluster,
    pub position: ScreenPosition,
}

impl Marker {
    /// Badge count shown when the marker stands for more than one pin.
    pub fn badge(&self) -> Option<usize> {
        let size = self.cluster.size();
        (size > 1).then_some(size)
    }
}

/// Compute the full marker set for one render of the map.
///
/// Marker order is the cluster order of [`cluster_pins`], so repeated
/// renders of the same snapshot produce identical output.
pub fn layout_markers(projector: &BoundsProjector, pins: &[Pin]) -> Vec<Marker> {
    cluster_pins(pins)
        .into_iter()
        .map(|cluster| {
            let rep = cluster.representative();
            let position =
                projector.project(GeoCoordinate::new(rep.latitude, rep.longitude));
            Marker { cluster, position }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Pin, UserRole};
    use crate::projection::MapBounds;

    fn projector() -> BoundsProjector {
        BoundsProjector::new(MapBounds {
            min_lat: 0.0,
            max_lat: 10.0,
            min_lng: 0.0,
            max_lng: 10.0,
        })
        .unwrap()
    }

    fn pin(id: &str, lat: f64, lng: f64) -> Pin {
        Pin {
            id: id.to_string(),
            title: id.to_string(),
            latitude: lat,
            longitude: lng,
            genre: Genre::Shop,
            reactions: 3,
            user_role: UserRole::General,
            business_name: None,
            business_icon: None,
        }
    }

    #[test]
    fn test_layout_empty_snapshot() {
        assert!(layout_markers(&projector(), &[]).is_empty());
    }

    #[test]
    fn test_layout_projects_representative() {
        let pins = vec![pin("a", 5.0, 5.0), pin("b", 5.00001, 5.00001)];
        let markers = layout_markers(&projector(), &pins);
        assert_eq!(markers.len(), 1);
        assert!((markers[0].position.x - 50.0).abs() < 1e-9);
        assert!((markers[0].position.y - 50.0).abs() < 1e-9);
        assert_eq!(markers[0].cluster.representative().id, "a");
    }

    #[test]
    fn test_badge_only_for_grouped_markers() {
        let pins = vec![
            pin("a", 2.0, 2.0),
            pin("b", 2.0, 2.0),
            pin("solo", 8.0, 8.0),
        ];
        let markers = layout_markers(&projector(), &pins);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].badge(), Some(2));
        assert_eq!(markers[1].badge(), None);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let pins = vec![pin("a", 1.0, 1.0), pin("b", 9.0, 9.0)];
        let first = layout_markers(&projector(), &pins);
        let second = layout_markers(&projector(), &pins);
        assert_eq!(first, second);
    }
}
