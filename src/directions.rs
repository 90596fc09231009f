//! Wire models for the directions-API response shape the tracker
//! consumes. Parsing only; issuing the request is the caller's job.

use serde::Deserialize;

use crate::coordinate::Coordinate;
use crate::route_step::{Maneuver, RouteStep, TravelMode};

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    pub summary: Option<String>,
    pub overview_polyline: Option<EncodedPolyline>,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsLeg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsStep {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    pub html_instructions: Option<String>,
    pub polyline: Option<EncodedPolyline>,
    pub travel_mode: Option<TravelMode>,
    pub maneuver: Option<Maneuver>,
}

/// A quantity paired with its display text, e.g. `{"text": "1.2 km",
/// "value": 1207}`.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

impl DirectionsResponse {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Steps of the first route, flattened across its legs.
    pub fn steps(&self) -> Vec<RouteStep> {
        self.routes
            .first()
            .map(|route| {
                route
                    .legs
                    .iter()
                    .flat_map(|leg| leg.steps.iter().map(RouteStep::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<LatLng> for Coordinate {
    fn from(loc: LatLng) -> Self {
        Coordinate::new(loc.lat, loc.lng)
    }
}

impl From<&DirectionsStep> for RouteStep {
    fn from(step: &DirectionsStep) -> Self {
        RouteStep {
            distance_text: step.distance.as_ref().map(|d| d.text.clone()),
            distance_meters: step.distance.as_ref().map(|d| d.value),
            duration_text: step.duration.as_ref().map(|d| d.text.clone()),
            duration_seconds: step.duration.as_ref().map(|d| d.value),
            start: step.start_location.map(Coordinate::from),
            end: step.end_location.map(Coordinate::from),
            instructions_html: step.html_instructions.clone(),
            encoded_polyline: step.polyline.as_ref().map(|p| p.points.clone()),
            travel_mode: step.travel_mode,
            maneuver: step.maneuver,
        }
    }
}
