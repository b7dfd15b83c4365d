//! Linear mapping between geographic coordinates and screen-space
//! percentages within a fixed rectangular map region.
//!
//! The simplified map view draws no tiles; it places markers by linearly
//! interpolating a coordinate inside the configured [`MapBounds`] and
//! expressing the result as percentages of the map container. The vertical
//! axis is inverted: geographic north maps to the top of the screen (y = 0).

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::models::{GeoCoordinate, ScreenPosition};

/// The rectangular geographic area the map view represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Default region: a 0.1 degree box around the app's home map center
/// (Kochi city, 33.6071N 133.6823E).
pub const MAP_BOUNDS: MapBounds = MapBounds {
    min_lat: 33.5571,
    max_lat: 33.6571,
    min_lng: 133.6322,
    max_lng: 133.7322,
};

/// Bounding client rect of the map container, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects coordinates into screen space and back for one fixed region.
///
/// The bounds are validated once here; the per-call projection math can
/// then never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsProjector {
    bounds: MapBounds,
}

impl BoundsProjector {
    /// Rejects bounds without strictly positive extent on both axes.
    pub fn new(bounds: MapBounds) -> Result<Self, MapError> {
        if !(bounds.min_lat < bounds.max_lat) || !(bounds.min_lng < bounds.max_lng) {
            return Err(MapError::InvalidBounds {
                min_lat: bounds.min_lat,
                max_lat: bounds.max_lat,
                min_lng: bounds.min_lng,
                max_lng: bounds.max_lng,
            });
        }
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Screen position of a coordinate as percentages of the container.
    ///
    /// The coordinate is normalized to 4-decimal precision first. Output is
    /// not clamped; points outside the region land outside [0, 100].
    pub fn project(&self, coord: GeoCoordinate) -> ScreenPosition {
        let coord = coord.normalized();
        let b = self.bounds;
        ScreenPosition {
            x: (coord.longitude - b.min_lng) / (b.max_lng - b.min_lng) * 100.0,
            y: (b.max_lat - coord.latitude) / (b.max_lat - b.min_lat) * 100.0,
        }
    }

    /// Geographic coordinate under a pointer position inside `rect`.
    ///
    /// Inverts [`project`](Self::project) for the fraction of the container
    /// the pointer sits at, then normalizes the result, so a
    /// project/unproject round trip is exact only at 4-decimal precision.
    pub fn unproject(
        &self,
        client_x: f64,
        client_y: f64,
        rect: ContainerRect,
    ) -> Result<GeoCoordinate, MapError> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(MapError::DegenerateContainer {
                width: rect.width,
                height: rect.height,
            });
        }

        let x_frac = (client_x - rect.left) / rect.width;
        let y_frac = (client_y - rect.top) / rect.height;

        let b = self.bounds;
        let coord = GeoCoordinate {
            latitude: b.max_lat - y_frac * (b.max_lat - b.min_lat),
            longitude: x_frac * (b.max_lng - b.min_lng) + b.min_lng,
        };
        Ok(coord.normalized())
    }
}
