use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// One instructed leg of a route ("turn right onto X").
///
/// Everything a directions response may omit is optional; the core reads
/// steps, it never fills them in. [`prune_completed_steps`] requires the
/// leading step to carry an end coordinate.
///
/// [`prune_completed_steps`]: crate::tracking::prune_completed_steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub distance_text: Option<String>,
    pub distance_meters: Option<u32>,
    pub duration_text: Option<String>,
    pub duration_seconds: Option<u32>,
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
    pub instructions_html: Option<String>,
    pub encoded_polyline: Option<String>,
    pub travel_mode: Option<TravelMode>,
    pub maneuver: Option<Maneuver>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Maneuver {
    TurnLeft,
    TurnRight,
    TurnSlightLeft,
    TurnSlightRight,
    TurnSharpLeft,
    TurnSharpRight,
    UturnLeft,
    UturnRight,
    KeepLeft,
    KeepRight,
    RampLeft,
    RampRight,
    ForkLeft,
    ForkRight,
    Merge,
    Straight,
    RoundaboutLeft,
    RoundaboutRight,
    Ferry,
    FerryTrain,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_mode_uses_upper_case_wire_form() {
        let mode: TravelMode = serde_json::from_str("\"DRIVING\"").unwrap();
        assert_eq!(mode, TravelMode::Driving);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"DRIVING\"");
    }

    #[test]
    fn maneuver_uses_kebab_case_wire_form() {
        let m: Maneuver = serde_json::from_str("\"roundabout-left\"").unwrap();
        assert_eq!(m, Maneuver::RoundaboutLeft);
    }

    #[test]
    fn unknown_maneuver_falls_back_to_other() {
        let m: Maneuver = serde_json::from_str("\"take-exit-42\"").unwrap();
        assert_eq!(m, Maneuver::Other);
    }

    #[test]
    fn default_step_is_fully_unknown() {
        let step = RouteStep::default();
        assert!(step.end.is_none());
        assert!(step.maneuver.is_none());
    }
}
