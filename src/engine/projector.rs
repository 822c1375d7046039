use crate::entities::{Coordinates, VenueCandidate, VenueOption};

/// Keeps candidates whose name starts with `query_prefix` (ignoring case),
/// attaches their distance from `origin` and orders them nearest first.
/// Equal distances keep their input order. Candidates without a usable
/// location are dropped.
pub fn project(
    candidates: Vec<VenueCandidate>,
    origin: &Coordinates,
    query_prefix: &str,
) -> Vec<VenueOption> {
    let prefix = query_prefix.to_lowercase();

    let mut options: Vec<VenueOption> = candidates
        .into_iter()
        .filter(|candidate| candidate.name.to_lowercase().starts_with(&prefix))
        .filter_map(|candidate| {
            let usable = candidate.coordinates.filter(Coordinates::is_valid);

            match usable {
                Some(coordinates) => {
                    let distance_km = origin.distance_km(&coordinates);
                    Some(VenueOption::from_candidate(candidate, coordinates, distance_km))
                }
                None => {
                    tracing::debug!("dropping {} without a usable location", candidate.id);
                    None
                }
            }
        })
        .collect();

    // sort_by is stable
    options.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    options
}
