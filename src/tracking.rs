//! Route tracking: trims the remaining polyline as vertices are passed,
//! signals recalculation on deviation, and retires completed steps.
//!
//! Both entry points run once per location-update tick. They take the
//! route state by value or `&mut`, so a tick owns the state exclusively
//! for its duration; callers process one update at a time.

use crate::coordinate::Coordinate;
use crate::distance::{distance_km, round_km};
use crate::route_step::RouteStep;

/// Lateral deviation beyond which a new route is requested, in km.
/// Wide enough to absorb GPS noise on a densely sampled polyline.
pub const DEVIATION_THRESHOLD_KM: f64 = 0.05;

/// Outcome of one deviation check.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationResult {
    pub recalculate: bool,
    /// The remaining polyline, leading vertices trimmed.
    pub polyline: Vec<Coordinate>,
}

/// Whether the caller that scheduled a check is still around to act on
/// it. UI callers hook this to their view lifecycle; elsewhere use
/// [`AlwaysActive`].
pub trait ContextLiveness {
    fn is_active(&self) -> bool;
}

pub struct AlwaysActive;

impl ContextLiveness for AlwaysActive {
    fn is_active(&self) -> bool {
        true
    }
}

impl<F: Fn() -> bool> ContextLiveness for F {
    fn is_active(&self) -> bool {
        self()
    }
}

/// Checks progress along the route and trims passed vertices.
///
/// Walks the head of the polyline: while the position is closer to the
/// next vertex than the current one it is making progress, and the
/// current vertex is dropped. The first non-progressing vertex decides
/// the verdict: beyond [`DEVIATION_THRESHOLD_KM`] away means the agent
/// left the route, within it means GPS noise.
///
/// A polyline of one point or fewer never triggers recalculation, and
/// neither does running off the trimmed end of the route. Distances are
/// compared at two-decimal (10 m) precision, matching the display form.
pub fn check_route(position: Coordinate, polyline: Vec<Coordinate>) -> DeviationResult {
    check_route_guarded(position, polyline, &AlwaysActive)
}

/// [`check_route`] with a liveness guard: when `ctx` reports the caller
/// gone, the verdict is forced to `recalculate: false` so nothing acts
/// on behalf of a torn-down context. Trimming already done is kept.
pub fn check_route_guarded(
    position: Coordinate,
    mut polyline: Vec<Coordinate>,
    ctx: &dyn ContextLiveness,
) -> DeviationResult {
    let mut recalculate = false;

    while polyline.len() > 1 {
        let d_current = round_km(distance_km(position, polyline[0]));
        let d_next = round_km(distance_km(position, polyline[1]));

        if d_current > d_next {
            // Progressing: the head vertex is behind us.
            tracing::debug!(vertex = ?polyline[0], "passed route vertex, trimming");
            polyline.remove(0);
        } else {
            if d_current > DEVIATION_THRESHOLD_KM {
                tracing::debug!(
                    distance_km = d_current,
                    "off route without progress, requesting recalculation"
                );
                recalculate = true;
            }
            break;
        }
    }

    if !ctx.is_active() {
        recalculate = false;
    }

    DeviationResult {
        recalculate,
        polyline,
    }
}

/// Retires the leading step once the route has moved past it.
///
/// Looks at the first step only: if its end coordinate (rounded to the
/// polyline's 5-decimal grid) is still a vertex of `polyline`, the step
/// is current and the list is untouched. Otherwise the step is removed.
/// At most one step goes per call; pruning accumulates across ticks.
///
/// The leading step must carry an end coordinate; a step list built
/// from a directions response always does.
pub fn prune_completed_steps(steps: &mut Vec<RouteStep>, polyline: &[Coordinate]) {
    let Some(first) = steps.first() else {
        return;
    };

    let end = first
        .end
        .expect("leading route step must have an end coordinate")
        .rounded();

    if !polyline.iter().any(|p| p.rounded() == end) {
        tracing::debug!("leading route step completed, removing");
        steps.remove(0);
    }
}
