//! Geo-position projection and marker-clustering engine for the pin map.
//!
//! The map view of the app is a simplified, non-tiled surface: markers are
//! placed by linearly projecting coordinates inside a fixed bounding
//! region, double-clicks are reverse-projected into new pin coordinates,
//! and pins sharing a rounded coordinate collapse into one marker. This
//! crate is that engine and nothing else; rendering, persistence and
//! networking live with the callers.
//!
//! All operations are pure and synchronous. The only configuration is the
//! [`projection::MapBounds`] value injected into a
//! [`projection::BoundsProjector`] at startup.

pub mod cluster;
pub mod coords;
pub mod error;
pub mod events;
pub mod markers;
pub mod models;
pub mod projection;
