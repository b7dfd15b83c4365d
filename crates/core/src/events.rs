//! Pointer events dispatched to the engine and the marker interaction
//! state machine.
//!
//! The view forwards raw pointer events as [`MapEvent`] values instead of
//! closures, so the whole interaction path is testable without a DOM.
//! [`MapInteraction`] owns the per-marker idle/hovered/selected state and
//! the overlay gate; the engine functions themselves stay stateless.

use tracing::debug;

use crate::error::MapError;
use crate::models::GeoCoordinate;
use crate::projection::{BoundsProjector, ContainerRect};

/// A pointer event on the map surface or one of its markers.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Double-click at a viewport position, used to place a new pin.
    DoubleClick { client_x: f64, client_y: f64 },
    /// Pointer entered the marker with this cluster key.
    PinEnter { key: String },
    /// Pointer left the marker with this cluster key.
    PinLeave { key: String },
    /// Click on the marker with this cluster key (opens its detail view).
    PinClick { key: String },
    /// The detail/creation overlay was closed.
    OverlayClosed,
}

/// Resolve a double-click event into a rounded geographic coordinate.
///
/// Events other than [`MapEvent::DoubleClick`] resolve to `Ok(None)`.
/// `enabled` is the overlay gate owned by the surrounding view: while an
/// overlay is open the view passes `false` and the event is dropped with
/// `Ok(None)`. A degenerate `rect` is a caller error.
pub fn pick_location(
    projector: &BoundsProjector,
    event: &MapEvent,
    rect: ContainerRect,
    enabled: bool,
) -> Result<Option<GeoCoordinate>, MapError> {
    let MapEvent::DoubleClick { client_x, client_y } = *event else {
        return Ok(None);
    };
    if !enabled {
        return Ok(None);
    }
    let coord = projector.unproject(client_x, client_y, rect)?;
    debug!(
        lat = coord.latitude,
        lng = coord.longitude,
        "resolved double-click location"
    );
    Ok(Some(coord))
}

/// Interaction state of a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    #[default]
    Idle,
    Hovered,
    Selected,
}

/// Hover/selection state for the marker layer.
///
/// Clicking a marker selects it and opens the detail overlay; while the
/// overlay is open, double-click placement is disabled. The reducer is
/// plain data in, data out; it never touches the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapInteraction {
    hovered: Option<String>,
    selected: Option<String>,
    overlay_open: bool,
}

impl MapInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate the view passes to [`pick_location`].
    pub fn double_click_enabled(&self) -> bool {
        !self.overlay_open
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// State of the marker with `key`. Selection wins over hover.
    pub fn marker_state(&self, key: &str) -> MarkerState {
        if self.selected.as_deref() == Some(key) {
            MarkerState::Selected
        } else if self.hovered.as_deref() == Some(key) {
            MarkerState::Hovered
        } else {
            MarkerState::Idle
        }
    }

    /// Advance the state machine for one event.
    ///
    /// `DoubleClick` is a no-op here; the view resolves it separately via
    /// [`pick_location`] so placement stays a pure function call.
    pub fn apply(&mut self, event: &MapEvent) {
        match event {
            MapEvent::DoubleClick { .. } => {}
            MapEvent::PinEnter { key } => {
                self.hovered = Some(key.clone());
            }
            MapEvent::PinLeave { key } => {
                if self.hovered.as_deref() == Some(key.as_str()) {
                    self.hovered = None;
                }
            }
            MapEvent::PinClick { key } => {
                self.selected = Some(key.clone());
                self.overlay_open = true;
            }
            MapEvent::OverlayClosed => {
                self.selected = None;
                self.overlay_open = false;
            }
        }
    }
}
