//! Geospatial helpers for client-side turn-by-turn navigation:
//! great-circle distances, compass-heading normalization, encoded
//! polyline decoding, and the per-tick route tracking that trims the
//! remaining polyline and decides when to request a new route.
//!
//! The crate consumes plain coordinates and route steps and returns
//! plain values; location providers, directions requests, and map
//! rendering live with the caller.

pub mod coordinate;
pub mod directions;
pub mod distance;
pub mod heading;
pub mod polyline;
pub mod route_step;
pub mod tracking;

pub use coordinate::{Coordinate, LocationFix};
pub use distance::{degrees_to_radians, distance_km, distance_to_fix, format_km};
pub use heading::normalize_heading;
pub use polyline::{decode_polyline, encode_polyline, with_precise_ends, PolylineError};
pub use route_step::{Maneuver, RouteStep, TravelMode};
pub use tracking::{
    check_route, check_route_guarded, prune_completed_steps, AlwaysActive, ContextLiveness,
    DeviationResult, DEVIATION_THRESHOLD_KM,
};
