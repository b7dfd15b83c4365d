use thiserror::Error;

/// Configuration errors raised by the projection layer.
///
/// These cover misconfiguration only (degenerate bounds or container
/// rectangles). Malformed coordinate values (`NaN`, infinities) are a
/// documented caller precondition and pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MapError {
    /// The configured map bounds have no area along at least one axis.
    #[error(
        "degenerate map bounds: lat {min_lat}..{max_lat}, lng {min_lng}..{max_lng}"
    )]
    InvalidBounds {
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    },

    /// The container rectangle a pointer event landed in has zero or
    /// negative extent, so no geographic position can be derived from it.
    #[error("degenerate container rect: {width}x{height}")]
    DegenerateContainer { width: f64, height: f64 },
}
