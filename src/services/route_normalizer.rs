use crate::constants::{METERS_PER_KM, NORMALIZED_ROUTE_COUNT};
use crate::models::route::format_duration;
use crate::models::{DirectionsResult, RouteCandidate, RouteRecord};

/// Convert a provider result into exactly [`NORMALIZED_ROUTE_COUNT`] routes.
///
/// A non-OK status or an empty candidate list yields no routes. Candidates keep
/// provider order; extras are dropped and missing slots repeat the last route.
pub fn normalize(result: &DirectionsResult) -> Vec<RouteRecord> {
    if !result.is_ok() {
        tracing::warn!(
            status = %result.status,
            "Routing provider returned status {}, treating as no routes",
            result.status
        );
        return Vec::new();
    }

    normalize_candidates(&result.candidates)
}

pub fn normalize_candidates(candidates: &[RouteCandidate]) -> Vec<RouteRecord> {
    let mut routes: Vec<RouteRecord> = candidates
        .iter()
        .take(NORMALIZED_ROUTE_COUNT)
        .map(to_record)
        .collect();

    if let Some(last) = routes.last().cloned() {
        if routes.len() < NORMALIZED_ROUTE_COUNT {
            tracing::debug!(
                available = routes.len(),
                "Padding {} route alternatives by repeating the last one",
                routes.len()
            );
        }
        routes.resize(NORMALIZED_ROUTE_COUNT, last);
    }

    routes
}

fn to_record(candidate: &RouteCandidate) -> RouteRecord {
    RouteRecord {
        distance_km: candidate.distance_meters / METERS_PER_KM,
        duration: format_duration(candidate.duration_seconds),
        encoded_path: candidate.encoded_path.clone(),
    }
}
